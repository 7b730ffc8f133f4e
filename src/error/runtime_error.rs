#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during reduction and evaluation.
pub enum RuntimeError {
    /// A symbol had no binding when it was evaluated.
    #[error("Undefined symbol '{name}'.")]
    UndefinedSymbol {
        /// The name of the symbol.
        name: String,
    },
    /// An assignment targeted a name that is already bound.
    #[error("Symbol '{name}' is already defined.")]
    AlreadyDefined {
        /// The name of the symbol.
        name: String,
    },
    /// A declaration targeted a name that is already declared.
    #[error("Symbol '{name}' is already declared.")]
    AlreadyDeclared {
        /// The name of the symbol.
        name: String,
    },
    /// A symbol's binding refers back to the symbol itself.
    #[error("Symbol '{name}' is defined in terms of itself.")]
    CircularDefinition {
        /// The name of the symbol.
        name: String,
    },
    /// Operands did not match the shape an operator requires, or an
    /// assignment target was not a symbol.
    #[error("Invalid operation: {details}.")]
    InvalidOperation {
        /// Details about the mismatch.
        details: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An exponent was not an integer small enough to compute exactly.
    #[error("Exponent {exponent} is too large or not an integer.")]
    ExponentTooLarge {
        /// The rendered exponent.
        exponent: String,
    },
    /// A list member index was outside the list.
    #[error("Index out of bounds. The list has {len} elements, but found index {found}.")]
    IndexOutOfBounds {
        /// The length of the list.
        len:   usize,
        /// The index that was actually requested.
        found: usize,
    },
    /// An object had no entry with the requested key.
    #[error("Object has no member '{member}'.")]
    UnknownMember {
        /// The requested key.
        member: String,
    },
}
