//! Pointer-type tags and the accessor expressions that reach their raw memory.
//!
//! A tag combines two orthogonal properties: whether the memory is mutable,
//! and whether it is a single element or a buffer. Generated bindings use the
//! accessor suffix (e.g. `.mutableRawBuffer.baseAddress`) on a value of that
//! pointer type to obtain the underlying address.
//!
//! Unknown tags are not an error: they resolve to the plain, non-mutable,
//! single-element case.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The four recognised pointer-type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PointerKind {
    AnyPointer,
    AnyMutablePointer,
    AnyBufferPointer,
    AnyMutableBufferPointer,
}

impl PointerKind {
    /// All tags, in declaration order.
    pub const ALL: [PointerKind; 4] = [
        PointerKind::AnyPointer,
        PointerKind::AnyMutablePointer,
        PointerKind::AnyBufferPointer,
        PointerKind::AnyMutableBufferPointer,
    ];

    /// Look up a tag by its exact spelling.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// The tag as spelled in generated code.
    pub fn tag(&self) -> &'static str {
        match self {
            PointerKind::AnyPointer => "AnyPointer",
            PointerKind::AnyMutablePointer => "AnyMutablePointer",
            PointerKind::AnyBufferPointer => "AnyBufferPointer",
            PointerKind::AnyMutableBufferPointer => "AnyMutableBufferPointer",
        }
    }

    pub fn is_mutable(&self) -> bool {
        matches!(
            self,
            PointerKind::AnyMutablePointer | PointerKind::AnyMutableBufferPointer
        )
    }

    pub fn is_buffer(&self) -> bool {
        matches!(
            self,
            PointerKind::AnyBufferPointer | PointerKind::AnyMutableBufferPointer
        )
    }

    /// Accessor for a read-only raw pointer.
    pub fn const_raw_pointer(&self) -> &'static str {
        AccessorFlavor::ConstRaw.resolve(self.is_mutable(), self.is_buffer())
    }

    /// Accessor for a raw pointer, mutable when the tag allows it.
    pub fn raw_pointer(&self) -> &'static str {
        AccessorFlavor::Raw.resolve(self.is_mutable(), self.is_buffer())
    }

    /// Accessor that keeps buffer shape instead of taking the base address.
    pub fn raw_o_pointer(&self) -> &'static str {
        AccessorFlavor::RawO.resolve(self.is_mutable(), self.is_buffer())
    }
}

impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for PointerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| {
            format!(
                "unknown pointer type '{}', expected one of: AnyPointer, AnyMutablePointer, \
                 AnyBufferPointer, AnyMutableBufferPointer",
                s
            )
        })
    }
}

/// The three accessor functions, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessorFlavor {
    /// See [`const_raw_pointer`].
    ConstRaw,
    /// See [`raw_pointer`].
    Raw,
    /// See [`raw_o_pointer`].
    RawO,
}

impl AccessorFlavor {
    pub const ALL: [AccessorFlavor; 3] = [
        AccessorFlavor::ConstRaw,
        AccessorFlavor::Raw,
        AccessorFlavor::RawO,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessorFlavor::ConstRaw => "const-raw",
            AccessorFlavor::Raw => "raw",
            AccessorFlavor::RawO => "raw-o",
        }
    }

    /// Accessor for a tag given by name. Unknown tags take the plain path.
    pub fn accessor(&self, tag: &str) -> &'static str {
        match PointerKind::from_tag(tag) {
            Some(kind) => self.resolve(kind.is_mutable(), kind.is_buffer()),
            None => self.resolve(false, false),
        }
    }

    // Buffer shape is decided before mutability for RawO, mutability first for Raw.
    fn resolve(&self, mutable: bool, buffer: bool) -> &'static str {
        match (*self, mutable, buffer) {
            (AccessorFlavor::ConstRaw, _, true) => ".rawBuffer.baseAddress",
            (AccessorFlavor::ConstRaw, _, false) => ".rawPointer",
            (AccessorFlavor::Raw, true, true) => ".mutableRawBuffer.baseAddress",
            (AccessorFlavor::Raw, true, false) => ".mutableRawPointer",
            (AccessorFlavor::Raw, false, _) => AccessorFlavor::ConstRaw.resolve(mutable, buffer),
            (AccessorFlavor::RawO, true, true) => ".mutableRawBuffer",
            (AccessorFlavor::RawO, false, true) => ".rawBuffer",
            (AccessorFlavor::RawO, _, false) => AccessorFlavor::Raw.resolve(mutable, buffer),
        }
    }
}

impl fmt::Display for AccessorFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessorFlavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "const-raw" | "const" => Ok(AccessorFlavor::ConstRaw),
            "raw" => Ok(AccessorFlavor::Raw),
            "raw-o" | "rawo" => Ok(AccessorFlavor::RawO),
            _ => Err(format!(
                "unknown accessor flavor '{}', expected one of: const-raw, raw, raw-o",
                s
            )),
        }
    }
}

/// `.rawBuffer.baseAddress` for buffer tags, `.rawPointer` otherwise.
pub fn const_raw_pointer(tag: &str) -> &'static str {
    AccessorFlavor::ConstRaw.accessor(tag)
}

/// Mutable accessor for mutable tags, [`const_raw_pointer`] otherwise.
pub fn raw_pointer(tag: &str) -> &'static str {
    AccessorFlavor::Raw.accessor(tag)
}

/// Whole-buffer accessor for buffer tags, [`raw_pointer`] otherwise.
pub fn raw_o_pointer(tag: &str) -> &'static str {
    AccessorFlavor::RawO.accessor(tag)
}
