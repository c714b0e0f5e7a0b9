#![doc(test(attr(deny(warnings))))]

//! Contains triple collection implementations that can be compared by the graph matcher.

pub mod memory;
