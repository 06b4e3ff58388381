//! Shared fixtures: a workspace directory with a template and a team list.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const TEMPLATE: &str = r#"<table>
  <tr>
    <td><img src="{{PROFILE_PHOTO_URL}}" alt="{{NAME}}"></td>
    <td>
      <strong>{{NAME}}</strong><br>
      {{TITLE}}<br>
      <a href="mailto:{{EMAIL}}">{{EMAIL}}</a><br>
      <a href="tel:{{PHONE_LINK}}">{{PHONE}}</a><br>
      <img src="{{LOGO_URL}}" alt="logo">
    </td>
  </tr>
</table>
"#;

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path().join("output")
    }

    pub fn write_team(&self, json: &str) -> PathBuf {
        let p = self.path().join("team.json");
        fs::write(&p, json).unwrap();
        p
    }
}

pub fn member(name: &str, email: &str, photo: &str) -> String {
    format!(
        r#"{{"name":"{name}","title":"Engineer","email":"{email}","phone":"+1 (555) 123-4567","photoFilename":"{photo}"}}"#
    )
}
