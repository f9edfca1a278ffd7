//! Type aliases for domain concepts.

/// A backend change-list identifier as stored in the ledger (decimal digits).
pub type ChangeId = String;

/// A commit SHA or any revision git accepts.
pub type CommitSha = String;

/// A p4 client workspace name.
pub type WorkspaceName = String;
