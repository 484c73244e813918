// Candidate intake: multipart submission, in-process store, resume files.
// The ranking core only ever sees snapshots produced here — never the store.

pub mod handlers;
pub mod storage;
pub mod store;
