//! LCD1602 demo firmware
//!
//! Brings up the display described by lcd.toml, shows a greeting with a
//! custom glyph and counts seconds on the second line.

#![no_std]
#![no_main]

extern crate alloc;

use core::fmt::Write;

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Timer;
use embedded_alloc::LlffHeap as Heap;
use heapless::String;
use lcd1602_core::{BusConfig, CursorType, DynLcd1602, Lcd1602};
use lcd1602_hal_rp2040::{build_bus, EmbassyTimer};
use {defmt_rtt as _, panic_probe as _};

include!(concat!(env!("OUT_DIR"), "/lcd_config.rs"));

// Holds the boxed transport
#[global_allocator]
static HEAP: Heap = Heap::empty();

const HEAP_SIZE: usize = 1024;

const HEART: [u8; 8] = [
    0b00000, 0b01010, 0b11111, 0b11111, 0b01110, 0b00100, 0b00000, 0b00000,
];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("LCD1602 firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("LCD wiring: {}", BUS_CONFIG);

    let bus = unwrap!(build_bus(&BUS_CONFIG, p));
    let mut lcd: DynLcd1602<EmbassyTimer> = unwrap!(Lcd1602::begin(bus, EmbassyTimer));
    info!("LCD ready: {}", lcd.capabilities());

    unwrap!(lcd.create_character(0, &HEART));
    unwrap!(lcd.map_character('♥', 0));
    unwrap!(lcd.write_text(0, 0, "Hello, LCD1602!"));
    unwrap!(lcd.write_text(0, 1, "I ♥ Rust"));

    if lcd.capabilities().can_read {
        let code = unwrap!(lcd.read_code(0, 0));
        info!("Read back {=u8:#x} at (0, 0)", code);
    }

    unwrap!(lcd.set_cursor_type(CursorType::Underscore));

    let mut seconds: u32 = 0;
    let mut text: String<5> = String::new();
    loop {
        Timer::after_secs(1).await;
        seconds = seconds.wrapping_add(1);

        text.clear();
        // Five digits always fit
        let _ = core::write!(text, "{:>5}", seconds % 100_000);
        if let Err(e) = lcd.write_text(11, 1, &text) {
            warn!("LCD write failed: {}", e);
        }

        if lcd.capabilities().can_control_backlight && seconds % 30 == 0 {
            let result = if seconds % 60 == 0 {
                lcd.set_backlight_on()
            } else {
                lcd.set_backlight_off()
            };
            if let Err(e) = result {
                warn!("Backlight switch failed: {}", e);
            }
        }

        let timeouts = lcd.busy_timeouts();
        if timeouts > 0 && seconds % 10 == 0 {
            warn!("{} LCD commands timed out waiting for the busy flag", timeouts);
        }
    }
}

fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}
