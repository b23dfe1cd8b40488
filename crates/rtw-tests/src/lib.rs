//! Integration tests for rtw crates.
//!
//! Algebraic properties of the vector type over randomized inputs, and the
//! vector -> color -> PPM path end to end.
