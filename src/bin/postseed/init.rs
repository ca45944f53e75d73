use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

use crate::{InitArgs, CFG_FILE_NAME};

lazy_static! {
    static ref CONTENT_DIR_LINE: Regex = Regex::new(r#"(?m)^content_dir = ".*"$"#).unwrap();
}

fn get_sample_cfg() -> &'static str {
    include_str!("../../../postseed.toml")
}

/// Points `content_dir` at `src` inside the new site directory.
fn replace_content_dir(site_dir: &Path, config_data: &str) -> String {
    let content_dir = site_dir.join("src");
    let line = format!("content_dir = '{}'", content_dir.display());
    CONTENT_DIR_LINE.replace(config_data, regex::NoExpand(&line)).to_string()
}

fn write_sample_cfg(site_dir: &Path) -> Result<()> {
    let cfg_path = site_dir.join(CFG_FILE_NAME);
    let file = match OpenOptions::new().write(true).create_new(true).open(&cfg_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => bail!("{} already exists", cfg_path.display()),
        Err(e) => return Err(e).with_context(|| format!("Error creating {}", cfg_path.display())),
    };

    let mut writer = BufWriter::new(file);
    let sample_cfg = replace_content_dir(site_dir, get_sample_cfg());
    writer.write_all(sample_cfg.as_bytes())?;
    writer.flush()?;

    println!("Wrote {}", cfg_path.display());
    Ok(())
}

pub fn init_cmd(args: InitArgs) -> Result<()> {
    let out_path = fs::canonicalize(&args.out_dir)
        .with_context(|| format!("Error converting path to absolute: {}", args.out_dir))?;

    if !out_path.is_dir() {
        bail!("Output path must be a directory: {}", out_path.display());
    }

    write_sample_cfg(&out_path)
}

#[cfg(test)]
mod tests {
    use postseed::config::read_config;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_sample_cfg() {
        let res = replace_content_dir(Path::new("/abs/path"), get_sample_cfg());
        assert!(res.contains("content_dir = '/abs/path/src'"));
        assert!(!res.contains(r#"content_dir = "src""#));
    }

    #[test]
    fn test_init_writes_readable_config() {
        let dir = TempDir::new().unwrap();
        init_cmd(InitArgs { out_dir: dir.path().display().to_string() }).unwrap();

        let site_dir = fs::canonicalize(dir.path()).unwrap();
        let config = read_config(&site_dir.join(CFG_FILE_NAME)).unwrap();
        assert_eq!(config.site.content_dir, site_dir.join("src"));

        // never clobbers an existing config
        assert!(init_cmd(InitArgs { out_dir: dir.path().display().to_string() }).is_err());
    }
}
