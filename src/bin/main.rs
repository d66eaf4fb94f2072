use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use rpsl_parser::{ErrorPolicy, ParserError, RpslParser, WhoisResponse, WhoisResponseItem};

/// rpsl-parser is a simple cli tool that parses RPSL objects and WHOIS server responses.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// Path to a file containing an RPSL object or WHOIS response, optionally gzip or bzip2 compressed.
    #[clap(name = "FILE")]
    file_path: PathBuf,

    /// Treat the input as a WHOIS server response containing any number of objects
    #[clap(short, long)]
    whois: bool,

    /// Output as JSON objects
    #[clap(long)]
    json: bool,

    /// Pretty-print JSON output
    #[clap(long)]
    pretty: bool,

    /// Also output WHOIS server messages
    #[clap(short, long)]
    messages: bool,

    /// Skip malformed objects of a WHOIS response instead of failing
    #[clap(short, long)]
    skip_malformed: bool,

    /// Validate attribute names and values against RFC 2622
    #[clap(long)]
    rfc2622: bool,

    /// Count parsed objects
    #[clap(short, long)]
    count: bool,
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    let file_path = opts.file_path.to_string_lossy();
    let text = match oneio::read_to_string(&file_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let policy = match opts.skip_malformed {
        true => ErrorPolicy::SkipMalformed,
        false => ErrorPolicy::FailFast,
    };
    let parser = RpslParser::new()
        .error_policy(policy)
        .validate_rfc2622(opts.rfc2622);

    let response = match parse(&parser, &text, opts.whois) {
        Ok(response) => response,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    if opts.count {
        println!("total objects: {}", response.objects().count());
        if !response.skipped().is_empty() {
            println!("skipped:       {}", response.skipped().len());
        }
        return;
    }

    let mut stdout = std::io::stdout();
    for item in response.items() {
        let output_str = match item {
            WhoisResponseItem::Message(_) if !opts.messages => continue,
            _ if opts.json => {
                let val = json!(item);
                let output_str = if opts.pretty {
                    serde_json::to_string_pretty(&val).unwrap_or_else(|_| val.to_string())
                } else {
                    val.to_string()
                };
                format!("{}\n", output_str)
            }
            WhoisResponseItem::Message(message) => message.to_string(),
            WhoisResponseItem::Object(object) => object.to_string(),
        };
        if let Err(e) = write!(stdout, "{}", output_str) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("{}", e);
            }
            std::process::exit(1);
        }
    }
}

/// A single object is wrapped into a response so both modes share the output path.
fn parse(parser: &RpslParser, text: &str, whois: bool) -> Result<WhoisResponse, ParserError> {
    if whois {
        return parser.parse_whois_response(text);
    }
    let object = parser.parse_object(text)?;
    Ok(WhoisResponse::from_iter([WhoisResponseItem::Object(object)]))
}
