//! HD44780 instruction encoding
//!
//! Every transfer to or from the controller is described by a 10-bit word
//! (HD44780 datasheet, table 6):
//! ```text
//! ┌────┬────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//! │ RS │ RW │ DB7 │ DB6 │ DB5 │ DB4 │ DB3 │ DB2 │ DB1 │ DB0 │
//! │ 9  │ 8  │ 7   │ 6   │ 5   │ 4   │ 3   │ 2   │ 1   │ 0   │
//! └────┴────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//! ```
//!
//! RS selects the data register (1) or the instruction register (0); RW
//! selects a read (1) or a write (0). Instructions are built by OR-ing a
//! base opcode with argument bits from the modules below.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod status;

pub use command::{
    display_control, entry_mode, function_set, mask, shift, Command, CommandError, COMMAND_MASK,
};
pub use status::Status;
