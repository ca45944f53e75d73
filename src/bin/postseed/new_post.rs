use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use spdlog::{info, warn};

use postseed::archetype::{Archetype, ArchetypePolicy, GeneratedFile};
use postseed::clock::{Clock, FixedClock, SystemClock};
use postseed::collection::Collection;
use postseed::config::Config;
use postseed::front_matter::FrontMatterFormat;
use postseed::logger::configure_logger;
use postseed::post_writer::write_post;

use crate::config::open_config;
use crate::{NewArgs, PostOutput};

struct Settings {
    policy: ArchetypePolicy,
    format: FrontMatterFormat,
    content_dir: PathBuf,
    collection: Option<Collection>,
}

impl Settings {
    fn from_config(config: Option<Config>) -> Settings {
        let Some(config) = config else {
            return Settings {
                policy: ArchetypePolicy::default(),
                format: FrontMatterFormat::default(),
                content_dir: PathBuf::from("."),
                collection: Some(Collection::default_posts()),
            };
        };

        let policy = config.archetype.resolved_policy();
        let collection = config.cms.collection(&policy.section);
        Settings {
            policy,
            format: config.archetype.format,
            content_dir: config.site.content_dir,
            collection,
        }
    }
}

fn parse_date(date: &str) -> Result<DateTime<Utc>> {
    let date = DateTime::parse_from_rfc3339(date)
        .with_context(|| format!("Invalid date {}. Expected RFC 3339, e.g. 2024-04-22T10:30:00Z", date))?;
    Ok(date.with_timezone(&Utc))
}

fn warn_undeclared(collection: Option<&Collection>, file: &GeneratedFile) {
    let Some(collection) = collection else {
        warn!("No collection describes {}. Editors will not see its fields", file.path);
        return;
    };

    for key in collection.undeclared_keys(&file.content) {
        warn!("Collection {} has no field for front matter key {}", collection.name, key);
    }
}

pub fn new_post_cmd(args: NewArgs) -> Result<()> {
    let stdout = io::stdout();
    new_post(args, &mut stdout.lock())
}

fn new_post(args: NewArgs, out: &mut impl Write) -> Result<()> {
    let config = open_config(args.config_path.map(PathBuf::from)).map_err(anyhow::Error::msg)?;
    if let Some(ref config) = config {
        if let Err(err) = configure_logger(config) {
            warn!("Error creating logger sinks. Using console instead. Desc={}", err);
        }
    }

    let mut settings = Settings::from_config(config);
    if let Some(author) = args.author {
        settings.policy.author = Some(author);
    }

    let clock: Box<dyn Clock> = match args.date {
        Some(ref date) => Box::new(FixedClock(parse_date(date)?)),
        None => Box::new(SystemClock),
    };

    let archetype = Archetype::with_clock(settings.policy, clock);
    let file = archetype.generate_checked(&args.title)?;
    warn_undeclared(settings.collection.as_ref(), &file);

    match args.output {
        PostOutput::Stdout => {
            write!(out, "{}", file.content.render(settings.format)?)?;
        }
        PostOutput::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&file)?)?;
        }
        PostOutput::File => {
            let target = write_post(&settings.content_dir, &file, settings.format, args.force)?;
            info!("Post {} ready for editing", file.path);
            writeln!(out, "Creating file {}", target.display())?;
        }
    }

    Ok(())
}
