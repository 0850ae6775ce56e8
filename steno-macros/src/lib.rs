//! Call-site macros for [`steno`](https://crates.io/crates/steno).
//!
//! Each logging macro does three jobs during expansion, all at build time:
//!
//! 1. **Validates** the format string against the supplied arguments: the
//!    argument count and order are checked here, and each argument is routed
//!    through a width- and signedness-typed constructor so a category mismatch
//!    becomes an ordinary type error at the call site.
//! 2. **Interns** the format text: a `file@line@format` key is baked into a
//!    per-call-site `static` placed in the severity's `.steno.*` link section,
//!    which the shipped linker fragment keeps out of loadable memory.
//! 3. **Gates** the call: argument expressions are only evaluated when the
//!    logger's threshold currently admits the level.
//!
//! The macros are re-exported from the `steno` crate; use them from there.

use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned};
use syn::parse::{Parse, ParseStream};
use syn::spanned::Spanned;
use syn::{Expr, LitStr, Token, parse_macro_input};

mod format;

use format::{Specifier, Width};

/// The parsed body of a logging macro: `logger, "format" [, argument]*`.
struct LogInput {
    logger: Expr,
    format: LitStr,
    arguments: Vec<Expr>,
}

impl Parse for LogInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let logger: Expr = input.parse()?;
        input.parse::<Token![,]>()?;
        let format: LitStr = input.parse()?;
        let mut arguments = Vec::new();
        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            arguments.push(input.parse()?);
        }
        Ok(Self {
            logger,
            format,
            arguments,
        })
    }
}

/// Logs at debug level with printf-like formatting.
///
/// The first argument is the logger (anything with the `enabled`/`log` pair),
/// the second the format string literal, followed by one expression per
/// conversion specifier. Supported conversions: `%d`/`%i` (signed integer),
/// `%u`/`%x`/`%X`/`%o` (unsigned integer) with optional `hh`/`h`/`l`/`ll`
/// length modifiers selecting 1/2/4/8 encoded bytes (default 4), `%s`
/// (`&CStr`), `%p` (`*const T`), `%k` (interned-text reference) and `%%`.
///
/// # Examples
///
/// ```rust
/// # use steno::time::TickClock;
/// # use steno::{Logger, Transport, Write};
/// # struct Null;
/// # struct NullWriter;
/// # impl Write for NullWriter { fn write(&mut self, _bytes: &[u8]) {} }
/// # impl Transport for Null {
/// #     type Writer<'a>
/// #         = NullWriter
/// #     where
/// #         Self: 'a;
/// #     fn writer(&self) -> Self::Writer<'_> { NullWriter }
/// # }
/// # let logger = Logger::new(TickClock::new(), Null);
/// steno::debug!(logger, "Is this %s or what?!", c"nice");
/// ```
#[proc_macro]
pub fn debug(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_log("Debug", ".steno.debug", input)
}

/// Logs at info level with printf-like formatting.
///
/// See [`debug!`](macro@debug) for the accepted conversions.
///
/// # Examples
///
/// ```rust
/// # use steno::time::TickClock;
/// # use steno::{Logger, Transport, Write};
/// # struct Null;
/// # struct NullWriter;
/// # impl Write for NullWriter { fn write(&mut self, _bytes: &[u8]) {} }
/// # impl Transport for Null {
/// #     type Writer<'a>
/// #         = NullWriter
/// #     where
/// #         Self: 'a;
/// #     fn writer(&self) -> Self::Writer<'_> { NullWriter }
/// # }
/// # let logger = Logger::new(TickClock::new(), Null);
/// steno::info!(logger, "I am %d years old...", 28);
/// ```
#[proc_macro]
pub fn info(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_log("Info", ".steno.info", input)
}

/// Logs at warning level with printf-like formatting.
///
/// See [`debug!`](macro@debug) for the accepted conversions.
#[proc_macro]
pub fn warning(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_log("Warning", ".steno.warning", input)
}

/// Logs at error level with printf-like formatting.
///
/// See [`debug!`](macro@debug) for the accepted conversions.
#[proc_macro]
pub fn error(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    expand_log("Error", ".steno.error", input)
}

/// Interns a string literal into the user partition and evaluates to its
/// reference.
///
/// The reference is pointer-sized, costs nothing at runtime, and can be logged
/// through a `%k` conversion; the text itself stays out of device memory like
/// any other interned text.
///
/// # Examples
///
/// ```rust
/// # use steno::time::TickClock;
/// # use steno::{Logger, Transport, Write};
/// # struct Null;
/// # struct NullWriter;
/// # impl Write for NullWriter { fn write(&mut self, _bytes: &[u8]) {} }
/// # impl Transport for Null {
/// #     type Writer<'a>
/// #         = NullWriter
/// #     where
/// #         Self: 'a;
/// #     fn writer(&self) -> Self::Writer<'_> { NullWriter }
/// # }
/// # let logger = Logger::new(TickClock::new(), Null);
/// let state = steno::intern!("battery low");
/// steno::warning!(logger, "entered state %k", state);
/// ```
#[proc_macro]
pub fn intern(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let text = parse_macro_input!(input as LitStr);
    match generate_intern(text) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn expand_log(
    level: &str,
    section: &str,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as LogInput);
    match generate_log(level, section, input) {
        Ok(tokens) => tokens.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

fn generate_log(level: &str, section: &str, input: LogInput) -> syn::Result<TokenStream> {
    let krate = steno_path()?;
    let LogInput {
        logger,
        format,
        arguments,
    } = input;

    let specifiers =
        format::parse(&format.value()).map_err(|error| syn::Error::new(format.span(), error))?;

    if specifiers.len() != arguments.len() {
        return Err(syn::Error::new(
            format.span(),
            format!(
                "format string expects {} argument{}, but {} {} supplied",
                specifiers.len(),
                if specifiers.len() == 1 { "" } else { "s" },
                arguments.len(),
                if arguments.len() == 1 { "was" } else { "were" },
            ),
        ));
    }

    // Spanning each constructor at its argument makes a category mismatch read
    // as a type error on that argument rather than on the whole macro.
    let tagged = specifiers
        .iter()
        .zip(&arguments)
        .map(|(&specifier, argument)| {
            let constructor = syn::Ident::new(constructor_name(specifier), Span::call_site());
            quote_spanned!(argument.span()=> #krate::Argument::#constructor(#argument))
        });

    let level = syn::Ident::new(level, Span::call_site());
    let section = LitStr::new(section, Span::call_site());

    Ok(quote!({
        let __steno_logger = &(#logger);
        if __steno_logger.enabled(#krate::Level::#level) {
            const __STENO_KEY: &str =
                ::core::concat!(::core::file!(), "@", ::core::line!(), "@", #format);
            #[unsafe(link_section = #section)]
            static __STENO_TEXT: #krate::InternedText<{ __STENO_KEY.len() + 1 }> =
                #krate::InternedText::new(__STENO_KEY);
            __steno_logger.log(
                #krate::Level::#level,
                &[
                    #krate::Argument::interned(__STENO_TEXT.reference()),
                    #(#tagged,)*
                ],
            );
        }
    }))
}

fn generate_intern(text: LitStr) -> syn::Result<TokenStream> {
    let krate = steno_path()?;

    // The interned form is NUL-terminated, so the text cannot embed one.
    if text.value().contains('\0') {
        return Err(syn::Error::new(
            text.span(),
            "interned text must not contain a NUL byte",
        ));
    }

    Ok(quote!({
        #[unsafe(link_section = ".steno.user")]
        static __STENO_TEXT: #krate::InternedText<{ #text.len() + 1 }> =
            #krate::InternedText::new(#text);
        __STENO_TEXT.reference()
    }))
}

fn constructor_name(specifier: Specifier) -> &'static str {
    match specifier {
        Specifier::Signed(Width::W1) => "signed8",
        Specifier::Signed(Width::W2) => "signed16",
        Specifier::Signed(Width::W4) => "signed32",
        Specifier::Signed(Width::W8) => "signed64",
        Specifier::Unsigned(Width::W1) => "unsigned8",
        Specifier::Unsigned(Width::W2) => "unsigned16",
        Specifier::Unsigned(Width::W4) => "unsigned32",
        Specifier::Unsigned(Width::W8) => "unsigned64",
        Specifier::String => "string",
        Specifier::Pointer => "pointer",
        Specifier::Interned => "interned",
    }
}

/// Returns a path to the `steno` crate for use in generated code.
fn steno_path() -> syn::Result<syn::Path> {
    proc_macro_crate::crate_name("steno")
        .map(|found| match found {
            proc_macro_crate::FoundCrate::Itself => {
                // The only place `steno` expands its own macros is doc-tests,
                // where it needs to be an external path anyway.
                syn::parse_quote!(::steno)
            }
            proc_macro_crate::FoundCrate::Name(name) => {
                let ident = syn::Ident::new(&name, Span::call_site());
                syn::parse_quote!(::#ident)
            }
        })
        .map_err(|_| syn::Error::new(Span::call_site(), "could not find the `steno` crate"))
}
