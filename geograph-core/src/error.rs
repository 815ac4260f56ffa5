//! Error types for the geograph core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A generator configuration violated one of its preconditions.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// A chain needs at least two main elements.
    #[error("chain length must be 2 or greater (got {got}); a chain of length 1 is a single node")]
    ChainLengthTooShort {
        /// The rejected length.
        got: usize,
    },
    /// A chain needs at least one layer per link.
    #[error("chain width must be 1 or greater (got {got})")]
    ChainWidthTooSmall {
        /// The rejected width.
        got: usize,
    },
    /// A chain needs at least two prongs per link.
    #[error("chain leaves must be 2 or greater (got {got}); a single leaf is just a line")]
    ChainLeavesTooFew {
        /// The rejected number of leaves.
        got: usize,
    },
    /// Stars and wheels need at least three spokes.
    #[error("there must be at least 3 spokes (got {got})")]
    TooFewSpokes {
        /// The rejected number of spokes.
        got: usize,
    },
    /// The single-parameter lollipop needs a multiple of three.
    #[error("lollipop parameter {k} must be divisible by 3")]
    NotDivisibleByThree {
        /// The rejected parameter.
        k: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// A chain needs at least two main elements.
        ChainLengthTooShort => ChainLengthTooShort { .. } => "GEOGRAPH_CHAIN_LENGTH_TOO_SHORT",
        /// A chain needs at least one layer per link.
        ChainWidthTooSmall => ChainWidthTooSmall { .. } => "GEOGRAPH_CHAIN_WIDTH_TOO_SMALL",
        /// A chain needs at least two prongs per link.
        ChainLeavesTooFew => ChainLeavesTooFew { .. } => "GEOGRAPH_CHAIN_LEAVES_TOO_FEW",
        /// Stars and wheels need at least three spokes.
        TooFewSpokes => TooFewSpokes { .. } => "GEOGRAPH_TOO_FEW_SPOKES",
        /// The single-parameter lollipop needs a multiple of three.
        NotDivisibleByThree => NotDivisibleByThree { .. } => "GEOGRAPH_NOT_DIVISIBLE_BY_THREE",
    }
}

/// Error raised while resolving a generator by name.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RegistryError {
    /// No registered topology matches the requested name.
    #[error("unknown topology `{name}`; expected one of: {available}")]
    UnknownTopology {
        /// Name exactly as requested.
        name: String,
        /// Comma-separated registered names.
        available: String,
    },
    /// The keyword arguments did not match the topology's parameters.
    #[error("invalid arguments for topology `{topology}`: {reason}")]
    InvalidArguments {
        /// Canonical name of the resolved topology.
        topology: &'static str,
        /// Decoder message describing the mismatch.
        reason: String,
    },
    /// The topology rejected its configuration.
    #[error("failed to construct topology `{topology}`: {error}")]
    Generator {
        /// Canonical name of the resolved topology.
        topology: &'static str,
        /// Underlying validation failure.
        #[source]
        error: GeneratorError,
    },
}

define_error_codes! {
    /// Stable codes describing [`RegistryError`] variants.
    enum RegistryErrorCode for RegistryError {
        /// No registered topology matches the requested name.
        UnknownTopology => UnknownTopology { .. } => "GEOGRAPH_UNKNOWN_TOPOLOGY",
        /// The keyword arguments did not match the topology's parameters.
        InvalidArguments => InvalidArguments { .. } => "GEOGRAPH_INVALID_ARGUMENTS",
        /// The topology rejected its configuration.
        GeneratorFailure => Generator { .. } => "GEOGRAPH_GENERATOR_FAILURE",
    }
}

impl RegistryError {
    /// Retrieve the inner [`GeneratorErrorCode`] when construction failed validation.
    #[must_use]
    pub const fn generator_code(&self) -> Option<GeneratorErrorCode> {
        match self {
            Self::Generator { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Error raised by [`crate::MappedTriples`] when it cannot hold the input.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MappedTriplesError {
    /// The triple list was empty, so no `(n, 3)` table can be formed.
    #[error("cannot create a dataset from zero triples")]
    EmptyTriples,
}

define_error_codes! {
    /// Stable codes describing [`MappedTriplesError`] variants.
    enum MappedTriplesErrorCode for MappedTriplesError {
        /// The triple list was empty.
        EmptyTriples => EmptyTriples => "GEOGRAPH_EMPTY_TRIPLES",
    }
}

/// Error raised by the quick factory functions.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FactoryError {
    /// The generator rejected its configuration.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// The dataset could not be built from the generated triples.
    #[error(transparent)]
    Dataset(#[from] MappedTriplesError),
}

/// Convenient alias for generator construction results.
pub type Result<T> = core::result::Result<T, GeneratorError>;
