//! Team list loading for batch generation.
//!
//! A team list is a JSON array of person objects. The file as a whole must be
//! a non-empty array; individual elements may still be malformed and are
//! reported per record by the batch loop.

mod entry;
mod load;

pub use entry::TeamEntry;
pub use load::{load_team, parse_team, TeamListError};

/// Shape shown to users when the team list is missing or unusable.
pub const EXAMPLE_TEAM_JSON: &str = r#"[
  {
    "name": "Joseph Akintolayo",
    "title": "CTO & Co-Founder",
    "email": "joseph@spendrule.com",
    "phone": "+1 (469) 998-2727",
    "photoFilename": "profile-joseph.jpg"
  },
  {
    "name": "Jane Doe",
    "title": "Head of Product",
    "email": "jane@spendrule.com",
    "phone": "+1 (469) 998-2728",
    "photoFilename": "profile-jane.jpg"
  }
]"#;
