use std::io::ErrorKind;
use std::path::PathBuf;
use std::{env, fs, io};

use serde::Deserialize;

use crate::archetype::ArchetypePolicy;
use crate::collection::{Collection, Upload};
use crate::front_matter::FrontMatterFormat;

#[derive(Deserialize)]
pub struct Site {
    pub name: String,
    pub content_dir: PathBuf,
}

#[derive(Deserialize, Default)]
pub struct Archetype {
    #[serde(flatten)]
    pub policy: ArchetypePolicy,
    #[serde(default)]
    pub author_from_os: bool,
    #[serde(default)]
    pub format: FrontMatterFormat,
}

#[derive(Deserialize, Default)]
pub struct Cms {
    pub versioning: Option<String>,
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub uploads: Vec<Upload>,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
    #[serde(default)]
    pub rotation: LogRotation,
    /// Rotated files kept around. Defaults to 30
    pub max_files: Option<usize>,
}

#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Daily,
    Hourly,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct Config {
    pub site: Site,
    #[serde(default)]
    pub archetype: Archetype,
    #[serde(default)]
    pub cms: Cms,
    pub log: Option<Log>,
}

/// OS user's real name, or the login name when no real name is set.
pub fn os_author() -> String {
    let name = whoami::realname();
    if name.is_empty() {
        return whoami::username();
    }
    name
}

impl Archetype {
    /// Policy with the author resolved: a fixed author wins over the OS user.
    pub fn resolved_policy(&self) -> ArchetypePolicy {
        let mut policy = self.policy.clone();
        if policy.author.is_none() && self.author_from_os {
            policy.author = Some(os_author());
        }
        policy
    }
}

impl Cms {
    /// Configured collection by name. Without any configured collection the blog's `posts` one is used.
    pub fn collection(&self, name: &str) -> Option<Collection> {
        if self.collections.is_empty() {
            let posts = Collection::default_posts();
            return (posts.name == name).then_some(posts);
        }
        self.collections.iter().find(|c| c.name == name).cloned()
    }
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent().unwrap_or(cur_exe.as_path());
    let rest = path.strip_prefix("${exe_dir}")
        .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e.to_string()))?;
    Ok(exe_dir.join(rest))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.site.content_dir = parse_path(cfg.site.content_dir)?;

    Ok(cfg)
}

pub fn read_config(cfg_path: &PathBuf) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}
