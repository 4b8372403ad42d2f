//! # Priced Capability
//!
//! The capability a Decorator needs from the value it wraps: a human-readable
//! description and a total. Anything implementing [`Priced`] can be decorated,
//! including another decorator, a shared reference, or a box.
//!
//! ```rust
//! use pattern_framework::Priced;
//!
//! struct Coffee;
//!
//! impl Priced for Coffee {
//!     fn description(&self) -> String { "Coffee".to_string() }
//!     fn calculate_total(&self) -> f64 { 3.0 }
//! }
//!
//! struct ExtraShot<T: Priced>(T);
//!
//! impl<T: Priced> Priced for ExtraShot<T> {
//!     fn description(&self) -> String { format!("{}, Extra Shot", self.0.description()) }
//!     fn calculate_total(&self) -> f64 { self.0.calculate_total() + 0.5 }
//! }
//!
//! let coffee = Coffee;
//! let doubled = ExtraShot(ExtraShot(&coffee));
//! assert_eq!(doubled.description(), "Coffee, Extra Shot, Extra Shot");
//! assert_eq!(doubled.calculate_total(), 4.0);
//! ```

/// Something with a description and a computed total.
pub trait Priced {
    fn description(&self) -> String;

    /// Recomputed on every call.
    fn calculate_total(&self) -> f64;
}

impl<T: Priced + ?Sized> Priced for &T {
    fn description(&self) -> String {
        (**self).description()
    }

    fn calculate_total(&self) -> f64 {
        (**self).calculate_total()
    }
}

impl<T: Priced + ?Sized> Priced for Box<T> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn calculate_total(&self) -> f64 {
        (**self).calculate_total()
    }
}

/// Renders an amount with at least one fractional digit (`4.0`, `3.5`, `5.75`).
///
/// Magnitudes outside `[1e-3, 1e7)` switch to scientific notation with an
/// upper-case `E` and a fractional mantissa (`1.0E7`, `2.5E-4`).
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }

    let magnitude = amount.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{amount:?}");
    }

    let scientific = format!("{amount:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}
