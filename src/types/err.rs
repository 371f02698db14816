//! Error types used in the library.
//!
//! - None of these are expected during use, with the exception of parse and configuration errors.
//! - A conflict is *not* an error. Conflicts are recorded on the context (see [Conflict](crate::context::Conflict)) and are part of the ordinary flow of a solve.
//! - Errors in the cleaner, scope and watch structures highlight some corrupt bookkeeping, and are surfaced rather than acted on.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::{db::ClauseKey, structures::literal::CLiteral};

/// The error type returned by context methods, wrapping the specific errors below.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    BCP(BCPError),
    ClauseDB(ClauseDBError),
    Cleaner(CleanerError),
    Config(ConfigError),
    Parse(ParseError),
    Scope(ScopeError),
    State(StateError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "atom database: {e:?}"),
            Self::BCP(e) => write!(f, "propagation: {e:?}"),
            Self::ClauseDB(e) => write!(f, "clause database: {e:?}"),
            Self::Cleaner(e) => write!(f, "cleaner: {e:?}"),
            Self::Config(e) => write!(f, "configuration: {e:?}"),
            Self::Parse(e) => write!(f, "parse: {e:?}"),
            Self::Scope(e) => write!(f, "scope: {e:?}"),
            Self::State(e) => write!(f, "state: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
///
/// Conflicts are not among these, as a conflict is recorded on the context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// Some corruption in the watched literals of a clause.
    /// E.g. a long watch for a literal which is not at a watched position of the clause.
    CorruptWatch(ClauseKey),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A clause is missing.
    Missing,

    /// Some attempt was made to store a clause too short for the database.
    /// Units are assignments, and binary clauses are stored in watch lists.
    ShortClause,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Violations of the invariants the cleaner depends on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CleanerError {
    /// A binary watch of an unassigned literal holds a false literal.
    /// As propagation is complete, the owner of the list should have a value.
    FalsifiedBinary,

    /// A clause which is not frozen was reduced below two literals.
    /// As propagation is complete, the clause should have been satisfied.
    UnpropagatedClause(ClauseKey),

    /// After shrinking, a watched position of a clause holds a literal with a value.
    AssignedWatch(ClauseKey),

    /// The watch list of a literal with a value holds some watch other than an external watch.
    AssignedList(CLiteral),
}

impl From<CleanerError> for ErrorKind {
    fn from(e: CleanerError) -> Self {
        ErrorKind::Cleaner(e)
    }
}

/// Errors when setting configuration options.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// No option has the given name.
    UnknownOption(String),

    /// The value could not be read as a value of the option.
    UnreadableValue(String),

    /// The value is outside the (inclusive) bounds of the option.
    OutOfBounds(String),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// An item which is not an integer, on the given line.
    Literal(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors related to scopes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScopeError {
    /// A request to pop more scopes than have been pushed.
    Underflow,
}

impl From<ScopeError> for ErrorKind {
    fn from(e: ScopeError) -> Self {
        ErrorKind::Scope(e)
    }
}

/// Requests made to a context in the wrong state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StateError {
    /// A procedure which requires the base level was called within some scope.
    NotAtBase,

    /// A procedure which requires complete propagation found queued literals.
    Unpropagated,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}
