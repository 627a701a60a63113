use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use striplab::cli::{
    decrypt_text, encrypt_text, frame_keyword, frame_manual, frame_sequential, frame_swap,
    generate_strips, set_gaps, show_info, show_stats, validate_file, DecryptOptions,
    EncryptOptions, GapOptions, GenerateOptions, StatsOptions,
};

/// Version info from build.rs
const VERSION: &str = env!("STRIPLAB_VERSION");
const BUILD: &str = env!("STRIPLAB_BUILD");
const PROFILE: &str = env!("STRIPLAB_PROFILE");
const GIT_HASH: &str = env!("STRIPLAB_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "striplab")]
#[command(author, about = "Jefferson/Bazeries strip cipher laboratory", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the board's strip set
    #[command(alias = "g")]
    Generate {
        /// Board file (created if it doesn't exist)
        board: PathBuf,

        /// Number of strips to generate
        #[arg(long, default_value = "10")]
        count: usize,

        /// Derive strips from a keyword (keyed-alphabet rotations)
        #[arg(long, conflicts_with = "strips_file")]
        keyword: Option<String>,

        /// Apply explicit strips from a text file, one per line
        #[arg(long, conflicts_with = "keyword")]
        strips_file: Option<PathBuf>,
    },

    /// Resolve or rearrange the mounting order
    #[command(alias = "f")]
    Frame {
        /// Board file to update
        board: PathBuf,

        #[command(subcommand)]
        action: FrameCommand,
    },

    /// Store the row gaps used for each direction
    Gap {
        /// Board file to update
        board: PathBuf,

        /// Encryption gap: rows below the baseline (1-25)
        #[arg(long)]
        encrypt: Option<usize>,

        /// Decryption gap: rows above the baseline (1-25)
        #[arg(long)]
        decrypt: Option<usize>,
    },

    /// Encrypt text with the board
    #[command(alias = "e")]
    Encrypt {
        /// Board file to use
        board: PathBuf,

        /// Plaintext; non-letters are dropped
        text: String,

        /// One-shot gap override (1-25)
        #[arg(long)]
        gap: Option<usize>,
    },

    /// Decrypt text with the board
    #[command(alias = "d")]
    Decrypt {
        /// Board file to use
        board: PathBuf,

        /// Ciphertext; non-letters are ignored
        text: String,

        /// One-shot gap override (1-25)
        #[arg(long)]
        gap: Option<usize>,
    },

    /// Validate a strips text file
    #[command(alias = "v")]
    Validate {
        /// Strips file, one strip per line
        file: PathBuf,
    },

    /// Show information about a board file
    #[command(alias = "i")]
    Info {
        /// Board file to inspect
        board: PathBuf,
    },

    /// Letter statistics for an encryption
    #[command(alias = "s")]
    Stats {
        /// Board file to use
        board: PathBuf,

        /// Plaintext to encrypt and analyze
        text: String,

        /// One-shot gap override (1-25)
        #[arg(long)]
        gap: Option<usize>,
    },
}

#[derive(Subcommand)]
enum FrameCommand {
    /// Mount the first N strips in set order
    Sequential {
        /// Number of strips to mount
        #[arg(long, default_value = "10")]
        count: usize,
    },

    /// Derive the order from a key phrase (classical keyword numbering)
    Keyword {
        /// Key phrase; non-letters are ignored
        #[arg(long)]
        key: String,

        /// Mounting count; the key's letter count when omitted
        #[arg(long)]
        count: Option<usize>,
    },

    /// Set the order explicitly from comma-separated strip indices
    Manual {
        /// Comma-separated indices, e.g. "0,2,1"
        #[arg(long)]
        order: String,
    },

    /// Exchange the strips mounted at two slots
    Swap {
        /// First slot
        #[arg(long)]
        a: usize,

        /// Second slot
        #[arg(long)]
        b: usize,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("striplab {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Generate {
            board,
            count,
            keyword,
            strips_file,
        } => {
            let options = GenerateOptions {
                count,
                keyword,
                strips_file,
            };

            match generate_strips(&board, &options) {
                Ok(count) => {
                    println!("Strip set replaced: {} strips in {}", count, board.display());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Frame { board, action } => {
            let resolved = match action {
                FrameCommand::Sequential { count } => frame_sequential(&board, count),
                FrameCommand::Keyword { key, count } => frame_keyword(&board, &key, count),
                FrameCommand::Manual { order } => frame_manual(&board, &order),
                FrameCommand::Swap { a, b } => frame_swap(&board, a, b),
            };

            match resolved {
                Ok(order) => {
                    println!("Frame order: {}", order);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Gap {
            board,
            encrypt,
            decrypt,
        } => {
            let options = GapOptions { encrypt, decrypt };

            match set_gaps(&board, &options) {
                Ok((enc, dec)) => {
                    println!("Gaps: encrypt +{}, decrypt -{}", enc, dec);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Encrypt { board, text, gap } => {
            let options = EncryptOptions { gap };

            match encrypt_text(&board, &text, &options) {
                Ok(cipher) => {
                    println!("{}", cipher);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Decrypt { board, text, gap } => {
            let options = DecryptOptions { gap };

            match decrypt_text(&board, &text, &options) {
                Ok(plain) => {
                    println!("{}", plain);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        Commands::Validate { file } => match validate_file(&file) {
            Ok(report) => {
                print!("{}", report);
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Info { board } => match show_info(&board) {
            Ok(info) => {
                print!("{}", info);
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Stats { board, text, gap } => {
            let options = StatsOptions { gap };

            match show_stats(&board, &text, &options) {
                Ok(stats) => {
                    print!("{}", stats);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
