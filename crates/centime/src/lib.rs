//! Fixed-point money arithmetic in integer minor units.
//!
//! Amounts are whole cents in an `i64`, so values stay exact under
//! arithmetic instead of drifting the way binary floats do. This crate
//! provides:
//! - [`Money`]: the immutable value type and its operator table
//! - [`FloorDiv`]: the floor-division operator the std ops set lacks
//! - [`Currency`] and [`format`]: display data and the `$1,234.50` renderer
//! - [`MoneyError`]: construction and arithmetic failures
//!
//! # Examples
//!
//! ```
//! use centime::Money;
//!
//! let price = Money::from_string("$6,150,593.22")?;
//! assert_eq!(price.amount(), 615_059_322);
//!
//! let per_person = price / 3;
//! assert_eq!(per_person.to_string(), "$2,050,197.74");
//! # Ok::<(), centime::MoneyError>(())
//! ```

pub mod currency;
pub mod error;
pub mod format;
pub mod money;

pub use currency::Currency;
pub use error::{MoneyError, MoneyResult};
pub use money::Money;
pub use money::ops::{Factor, FloorDiv};
