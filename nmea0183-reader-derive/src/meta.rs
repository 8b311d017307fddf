use std::{collections::HashSet, fmt::Display};

use proc_macro2::{Span, TokenStream};
use quote::{ToTokens, quote};
use syn::{
    Attribute, Error, Expr, Ident, Lit, LitChar, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MetaAttributeType {
    Kind,
    Unit,
    With,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "kind" => Some(Self::Kind),
            "unit" => Some(Self::Unit),
            "with" => Some(Self::With),
            _ => None,
        }
    }

    fn is_top_level(&self) -> bool {
        matches!(self, Self::Kind)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Kind => "kind",
            Self::Unit => "unit",
            Self::With => "with",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: TokenStream,
    span: Span,
}

impl MetaAttribute {
    pub fn arg(&self) -> &TokenStream {
        &self.arg
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let r#type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(ident.span(), "nmea0183-reader-derive: Unknown nmea attribute")
        })?;

        // read (value) or = value
        let arg = match r#type {
            MetaAttributeType::Kind => parse_argument::<Ident>(input)?,
            MetaAttributeType::Unit => parse_argument::<LitChar>(input)?,
            MetaAttributeType::With => parse_argument::<Expr>(input)?,
        };

        Ok(MetaAttribute {
            r#type,
            arg,
            span: ident.span(),
        })
    }
}

struct List<T: Parse>(Vec<T>);

impl<T: Parse> Parse for List<T> {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<T, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

fn parse_argument<P>(input: ParseStream) -> Result<TokenStream>
where
    P: Parse + ToTokens,
{
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;

        // `unit = 'M'` is a literal already; `with = "path"` is a string to re-parse.
        if input.peek(Lit) {
            let value = Lit::parse(input)?;
            return match value {
                Lit::Str(string) => {
                    let parsed: P = string.parse()?;
                    Ok(quote! { #parsed })
                }
                other => {
                    let parsed: P = syn::parse2(other.into_token_stream())?;
                    Ok(quote! { #parsed })
                }
            };
        }

        let parsed: P = input.parse()?;
        Ok(quote! { #parsed })
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: P = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "nmea0183-reader-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

fn parse_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List<MetaAttribute>>())
        .collect::<Result<Vec<_>>>()
        .map(|lists| lists.into_iter().flat_map(|list| list.0).collect())
}

fn reject_duplicates(attributes: &[MetaAttribute]) -> Result<()> {
    let mut seen = HashSet::new();

    for meta_attr in attributes {
        if !seen.insert(meta_attr.r#type) {
            return Err(Error::new(
                meta_attr.span(),
                format!(
                    "nmea0183-reader-derive: Duplicate nmea attribute `{}`",
                    meta_attr.r#type
                ),
            ));
        }
    }

    Ok(())
}

pub fn parse_top_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let attributes = parse_attributes(attrs)?;

    if let Some(meta_attr) = attributes.iter().find(|attr| !attr.r#type.is_top_level()) {
        return Err(Error::new(
            meta_attr.span(),
            format!(
                "nmea0183-reader-derive: Attribute `{}` is not allowed at the top level",
                meta_attr.r#type
            ),
        ));
    }

    reject_duplicates(&attributes)?;
    Ok(attributes)
}

pub fn parse_field_level_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let attributes = parse_attributes(attrs)?;

    if let Some(meta_attr) = attributes.iter().find(|attr| attr.r#type.is_top_level()) {
        return Err(Error::new(
            meta_attr.span(),
            format!(
                "nmea0183-reader-derive: Attribute `{}` is not allowed at the field level",
                meta_attr.r#type
            ),
        ));
    }

    reject_duplicates(&attributes)?;

    // A field is decoded one way only.
    if attributes.len() > 1 {
        return Err(Error::new(
            attributes[1].span(),
            format!(
                "nmea0183-reader-derive: Attribute `{}` cannot be combined with `{}`",
                attributes[1].r#type, attributes[0].r#type
            ),
        ));
    }

    Ok(attributes)
}
