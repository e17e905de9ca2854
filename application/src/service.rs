mod employee;

pub use self::employee::*;
