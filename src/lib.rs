// Library root
// -----------
// Admin tooling for a game-server backend. Each binary under `src/bin` is
// an independent, short-lived client: it (optionally) authenticates, runs
// a handful of HTTP calls, prints progress, and exits.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the backend (categories,
//   sprite upload, world submission, login) and the wire types it speaks.
// - `namegen`: Random world-name generation with three interchangeable
//   strategies (curated lists, word file with fallback, random token).
// - `flows`: Sequential batch operations shared by the binaries, plus
//   their run summaries.
// - `ui`: Terminal listing and prompt helpers.
//
// Keeping this separation lets the batch flows be exercised in tests
// without a terminal attached.
pub mod api;
pub mod flows;
pub mod namegen;
pub mod ui;
