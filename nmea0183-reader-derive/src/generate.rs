use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, Result, Type};

use crate::meta::{self, MetaAttribute, MetaAttributeType};

/// How one struct field is read from the sentence.
enum FieldDecoder {
    /// One field, through `NmeaParse`.
    Next,
    /// A value field and a unit field.
    Unit(TokenStream),
    /// A user function taking the cursor.
    With(TokenStream),
}

impl FieldDecoder {
    fn from_attributes(attributes: &[MetaAttribute]) -> Self {
        match attributes.first() {
            Some(attr) => match attr.r#type {
                MetaAttributeType::Unit => FieldDecoder::Unit(attr.arg().clone()),
                MetaAttributeType::With => FieldDecoder::With(attr.arg().clone()),
                MetaAttributeType::Kind => FieldDecoder::Next,
            },
            None => FieldDecoder::Next,
        }
    }

    fn statement(&self, name: &Ident, ty: &Type, cursor: &Ident) -> TokenStream {
        match self {
            FieldDecoder::Next => quote! {
                let #name: #ty = #cursor.next()?;
            },
            FieldDecoder::Unit(unit) => quote! {
                let #name: #ty = #cursor.next_with_unit(#unit)?;
            },
            FieldDecoder::With(path) => quote! {
                let #name: #ty = (#path)(&mut #cursor)?;
            },
        }
    }
}

pub fn generate_decode_record_impl(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;

    let Data::Struct(data) = &input.data else {
        return Err(Error::new(
            name.span(),
            "nmea0183-reader-derive: DecodeRecord can only be derived for structs",
        ));
    };

    if !input.generics.params.is_empty() {
        return Err(Error::new(
            name.span(),
            "nmea0183-reader-derive: Generic records are not supported",
        ));
    }

    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new(
            name.span(),
            "nmea0183-reader-derive: DecodeRecord requires named fields",
        ));
    };

    let attributes = meta::parse_top_level_attributes(&input.attrs)?;
    let kind = attributes
        .iter()
        .find(|attr| attr.r#type == MetaAttributeType::Kind)
        .map(MetaAttribute::arg)
        .ok_or_else(|| {
            Error::new(
                name.span(),
                "nmea0183-reader-derive: Missing `#[nmea(kind(...))]` attribute",
            )
        })?;

    let cursor = Ident::new("nmea_cursor", Span::call_site());
    let mut statements = Vec::with_capacity(fields.named.len());
    let mut field_names = Vec::with_capacity(fields.named.len());

    for field in &fields.named {
        let Some(field_name) = &field.ident else {
            continue;
        };

        let attributes = meta::parse_field_level_attributes(&field.attrs)?;
        let decoder = FieldDecoder::from_attributes(&attributes);

        statements.push(decoder.statement(field_name, &field.ty, &cursor));
        field_names.push(field_name);
    }

    Ok(quote! {
        impl nmea0183_reader::DecodeRecord for #name {
            const KIND: nmea0183_reader::SentenceKind = nmea0183_reader::SentenceKind::#kind;

            fn decode(
                nmea_fields: &nmea0183_reader::Fields<'_>,
            ) -> ::core::result::Result<Self, nmea0183_reader::DecodeError> {
                let mut #cursor = nmea_fields.cursor();
                #(#statements)*
                #cursor.finish()?;

                ::core::result::Result::Ok(Self {
                    #(#field_names),*
                })
            }
        }
    })
}
