use std::path::PathBuf;

use clap::Parser;

use crate::constants::VertexId;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the vertices .csv file (columns: id,label)
    vertices: PathBuf,

    /// Path to the arcs .csv file (columns: source,target,weight)
    arcs: PathBuf,

    /// Id of the start vertex
    #[arg(short, long, value_name = "id")]
    from: VertexId,

    /// Id of the goal vertex
    #[arg(short, long, value_name = "id")]
    to: VertexId,

    /// Print the result as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cfg {
    pub vertices_file: PathBuf,
    pub arcs_file: PathBuf,
    pub from: VertexId,
    pub to: VertexId,
    pub json: bool,
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        Cfg {
            vertices_file: cli.vertices,
            arcs_file: cli.arcs,
            from: cli.from,
            to: cli.to,
            json: cli.json,
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cfg::from)
}
