use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use spdlog::{debug, info};

use crate::archetype::GeneratedFile;
use crate::error::ArchetypeError;
use crate::front_matter::FrontMatterFormat;

/// Writes a generated post below `root`, creating the section directory when needed.
/// An existing file is only replaced when `overwrite` is set.
/// Paths with `..`, root or prefix components are refused.
pub fn write_post(root: &Path, file: &GeneratedFile, format: FrontMatterFormat, overwrite: bool) -> Result<PathBuf, ArchetypeError> {
    let relative = file.relative_path();
    if !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(ArchetypeError::OutsideRoot { path: relative });
    }

    let target = root.join(relative);
    let rendered = file.content.render(format)?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let out = match OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .create_new(!overwrite)
        .open(&target) {
        Ok(out) => out,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(ArchetypeError::AlreadyExists { path: target });
        }
        Err(e) => return Err(e.into()),
    };

    debug!("Writing {} bytes to {}", rendered.len(), target.display());
    let mut writer = BufWriter::new(out);
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;

    info!("Created post {}", target.display());
    Ok(target)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::archetype::{Archetype, ArchetypePolicy};
    use crate::clock::FixedClock;
    use crate::test_data::{fixed_instant, release_policy, RELEASE_TITLE};

    use super::*;

    #[test]
    fn test_write_new_post() {
        let root = TempDir::new().unwrap();
        let archetype = Archetype::with_clock(release_policy(), FixedClock(fixed_instant()));
        let file = archetype.generate(RELEASE_TITLE);

        let target = write_post(root.path(), &file, FrontMatterFormat::Yaml, false).unwrap();

        assert_eq!(target, root.path().join("posts").join("release-3.0.md"));
        let written = fs::read_to_string(&target).unwrap();
        assert_eq!(written, file.content.render(FrontMatterFormat::Yaml).unwrap());
    }

    #[test]
    fn test_refuse_overwrite() {
        let root = TempDir::new().unwrap();
        let archetype = Archetype::with_clock(ArchetypePolicy::default(), FixedClock(fixed_instant()));
        let file = archetype.generate("Hello World");

        write_post(root.path(), &file, FrontMatterFormat::Toml, false).unwrap();
        let err = write_post(root.path(), &file, FrontMatterFormat::Yaml, false).unwrap_err();
        assert!(matches!(err, ArchetypeError::AlreadyExists { .. }));

        // first write survives
        let written = fs::read_to_string(root.path().join("posts/hello-world.md")).unwrap();
        assert!(written.starts_with("+++\n"));
    }

    #[test]
    fn test_refuse_escaping_root() {
        let base = TempDir::new().unwrap();
        let root = base.path().join("site").join("src");
        let archetype = Archetype::with_clock(ArchetypePolicy::default(), FixedClock(fixed_instant()));

        let file = archetype.generate("../../../escaped");
        let err = write_post(&root, &file, FrontMatterFormat::Yaml, false).unwrap_err();
        assert!(matches!(err, ArchetypeError::OutsideRoot { .. }));
        assert!(!base.path().join("escaped.md").exists());
        assert!(!root.exists());

        let file = archetype.generate("drafts/../../../up");
        assert!(matches!(write_post(&root, &file, FrontMatterFormat::Yaml, false), Err(ArchetypeError::OutsideRoot { .. })));
    }

    #[test]
    fn test_nested_title_stays_below_root() {
        let root = TempDir::new().unwrap();
        let archetype = Archetype::with_clock(ArchetypePolicy::default(), FixedClock(fixed_instant()));

        let file = archetype.generate("Part 1/Intro");
        let target = write_post(root.path(), &file, FrontMatterFormat::Yaml, false).unwrap();
        assert_eq!(target, root.path().join("posts").join("part-1").join("intro.md"));
        assert!(target.exists());
    }

    #[test]
    fn test_overwrite() {
        let root = TempDir::new().unwrap();
        let archetype = Archetype::with_clock(ArchetypePolicy::default(), FixedClock(fixed_instant()));
        let file = archetype.generate("Hello World");

        write_post(root.path(), &file, FrontMatterFormat::Toml, false).unwrap();
        let target = write_post(root.path(), &file, FrontMatterFormat::Yaml, true).unwrap();

        let written = fs::read_to_string(target).unwrap();
        assert!(written.starts_with("---\n"));
    }
}
