use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, author, arg_required_else_help = true)]
pub struct Cli {
    /// Log level (overridden by RUST_LOG).
    #[arg(long = "log-level", global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decrypt hex ciphertext and print the plaintext
    Decrypt(DecryptArgs),

    /// Encrypt hex plaintext and print the ciphertext
    Encrypt(EncryptArgs),

    /// Run the built-in AES-CBC and DES-ECB known-answer checks
    Selftest,
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Algorithm and mode of operation.
    #[arg(short = 'a', long = "algo", value_enum, default_value_t = Algo::AesCbc)]
    pub algo: Algo,

    /// Input message as hex.
    #[arg(short = 'i', long = "input", value_name = "HEX")]
    pub input: String,

    /// Initialisation vector as hex (aes-cbc only).
    #[arg(long = "iv", value_name = "HEX")]
    pub iv: Option<String>,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct DecryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key as hex.
    #[arg(short = 'k', long = "key", value_name = "HEX")]
    pub key: String,

    /// Strip PKCS#7 padding from the plaintext.
    #[arg(long = "unpad")]
    pub unpad: bool,

    /// Print the plaintext as UTF-8 text instead of hex.
    #[arg(long = "text")]
    pub text: bool,
}

#[derive(Args, Debug)]
#[command(arg_required_else_help = true)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Key as hex.
    #[arg(
        short = 'k',
        long = "key",
        value_name = "HEX",
        required_unless_present = "gen_key",
        conflicts_with = "gen_key"
    )]
    pub key: Option<String>,

    /// Generate a random key of the right size for --algo and print it.
    #[arg(long = "gen-key")]
    pub gen_key: bool,

    /// PKCS#7 pad the plaintext before encrypting.
    #[arg(long = "pad")]
    pub pad: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum Algo {
    /// AES-128 in CBC mode
    #[value(name = "aes-cbc")]
    AesCbc,
    /// Single DES in ECB mode
    #[value(name = "des-ecb")]
    DesEcb,
    /// Triple DES (16 or 24 byte key) in ECB mode
    #[value(name = "tdes-ecb")]
    TdesEcb,
}

impl Algo {
    pub fn block_size(self) -> usize {
        match self {
            Algo::AesCbc => symdec::AES_BLOCK_SIZE,
            Algo::DesEcb | Algo::TdesEcb => symdec::DES_BLOCK_SIZE,
        }
    }
}
