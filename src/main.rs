use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use taplist::{config, generate, load, output};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "taplist")]
#[command(about = "Static page generator for local craft beer directories")]
#[command(long_about = "\
Static page generator for local craft beer directories

Takes a JSON file of breweries, bottle shops, bars, and restaurants and
renders one static HTML page: six category sections, alphabetical within
each, with phone numbers, status badges, and social links formatted per
record.

Input records (one JSON array):

  name          required — display name and sort key
  slug          required — unique anchor id
  types         required — category tags: craft_brewery, chain_brewery,
                craft_brewery_in_planning, bottle_shop, bar, restaurant
  address       linked only when google_maps_url is also present
  phone_number  digit string, formatted (AAA) BBB-CCCC for display
  open_status   badge unless some spelling of \"open\"
  website, twitter_handle, facebook_url, instagram_handle, yelp_url,
  trip_advisor_url, untappd_url, beer_advocate_url, rate_beer_url,
  brewery_db_url, store_url, food, drink_on_premise, notes

A record may name several types and appears once per matching section.

Site chrome (title, branding image, map embed, footer) comes from an
optional taplist.toml next to the input file; built-in defaults apply
otherwise. Use --config to point somewhere else.")]
#[command(version = version_string())]
struct Cli {
    /// Input JSON file with location records
    #[arg(short, long, value_name = "input.json")]
    input: PathBuf,

    /// Output HTML file
    #[arg(short, long, value_name = "output.html")]
    output: PathBuf,

    /// Overwrite the output file without asking
    #[arg(short, long)]
    force: bool,

    /// Site config file (default: taplist.toml beside the input)
    #[arg(long, value_name = "taplist.toml")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut records = load::load_records(&cli.input)?;

    if cli.output.exists() && !cli.force && !confirm_overwrite(&cli.output)? {
        // Declining is a clean exit, not a failure
        return Ok(());
    }

    load::sort_records(&mut records);
    let config = config::load_config(cli.config.as_deref(), &cli.input)?;
    let page = generate::render_page(&records, &config, chrono::Local::now())?;

    std::fs::write(&cli.output, page)?;

    output::print_generate_output(&records);
    println!("Wrote {}", cli.output.display());
    Ok(())
}

/// Ask before clobbering an existing output file. Only an explicit y/yes
/// (any case) proceeds; everything else is a quiet no.
fn confirm_overwrite(path: &Path) -> io::Result<bool> {
    print!("Output file \"{}\" exists. Overwrite? [y/n]: ", path.display());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
