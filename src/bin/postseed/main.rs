use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::fields::fields_cmd;
use crate::init::init_cmd;
use crate::new_post::new_post_cmd;

mod config;
mod fields;
mod init;
mod new_post;

const CFG_FILE_NAME: &str = "postseed.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Create a new post from its title
    New(NewArgs),
    /// List the fields editors can change in a collection
    Fields(FieldsArgs),
    /// Write a sample postseed.toml
    Init(InitArgs),
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Title of the post
    #[arg(short, long)]
    title: String,

    /// Where the new post goes
    #[arg(short, long, value_enum, default_value_t = PostOutput::Stdout)]
    output: PostOutput,

    /// Creation date (RFC 3339). Defaults to now
    #[arg(short, long)]
    date: Option<String>,

    /// Author, overriding the configured one
    #[arg(short, long)]
    author: Option<String>,

    /// Replace the post if it already exists
    #[arg(short, long)]
    force: bool,

    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

#[derive(Parser, Debug)]
struct FieldsArgs {
    /// Collection name
    #[arg(long, default_value = "posts")]
    collection: String,

    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Directory where postseed.toml is written
    #[arg(short, long)]
    out_dir: String,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum PostOutput {
    /// Writes the rendered post to the stdout
    Stdout,
    /// Writes the rendered post below the content directory
    File,
    /// Writes path and front matter as JSON to the stdout
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args {
        Args::New(args) => new_post_cmd(args),
        Args::Fields(args) => fields_cmd(args),
        Args::Init(args) => init_cmd(args),
    }
}
