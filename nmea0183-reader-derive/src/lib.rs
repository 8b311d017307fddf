//! # Derive macro for NMEA 0183 record decoders
//!
//! `nmea0183-reader-derive` generates the `DecodeRecord` implementation of a
//! sentence record: one cursor read per struct field, then a check that no
//! fields are left over. It is re-exported by [`nmea0183-reader`] and not
//! meant to be used on its own.
//!
//! [`nmea0183-reader`]: https://crates.io/crates/nmea0183-reader

use generate::generate_decode_record_impl;
use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod generate;
mod meta;

#[doc = include_str!("../README.md")]
#[proc_macro_derive(DecodeRecord, attributes(nmea))]
pub fn derive_decode_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_decode_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
