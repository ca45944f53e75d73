use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::config::open_config;
use crate::FieldsArgs;

pub fn fields_cmd(args: FieldsArgs) -> Result<()> {
    let stdout = io::stdout();
    list_fields(args, &mut stdout.lock())
}

fn list_fields(args: FieldsArgs, out: &mut impl Write) -> Result<()> {
    let config = open_config(args.config_path.map(PathBuf::from)).map_err(anyhow::Error::msg)?;
    let cms = config.map(|config| config.cms).unwrap_or_default();

    let Some(collection) = cms.collection(&args.collection) else {
        bail!("Unknown collection {}", args.collection);
    };

    writeln!(out, "{} ({})", collection.name, collection.store)?;
    for field in &collection.fields {
        writeln!(out, "{}", field)?;
    }

    if let Some(ref branch) = cms.versioning {
        writeln!(out, "versioning: {}", branch)?;
    }
    for upload in &cms.uploads {
        writeln!(out, "upload {} ({})", upload.name, upload.store)?;
    }

    Ok(())
}
