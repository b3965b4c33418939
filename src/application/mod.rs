//! Application layer: the vending machine itself, composing the slot and
//! money rules into the public load / insert / buy / refund operations.

pub mod machine;
