mod args;

use args::{Algo, Cli, Commands, CommonArgs, DecryptArgs, EncryptArgs};
use clap::Parser;

use std::time::Instant;

use thiserror::Error;

// known-answer vectors for `symdec selftest`
const AES_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const AES_IV: &str = "6bc1bee22e409f96e93d7e117393172a";
const AES_CIPHERTEXT: &str = "679647F478987F56FFF83C7C934567A6625F4335D0A2D981B5C7E86C6124A628";
const DES_KEY: &str = "7364667364667373";
const DES_CIPHERTEXT: &str = "d39c2f8e91d3da40";

#[derive(Debug, Error)]
pub enum CliError {
    #[error("--iv is required with --algo aes-cbc")]
    MissingIv,

    #[error("--iv is only valid with --algo aes-cbc")]
    IvInvalidAlgo,

    #[error("either --key or --gen-key is required")]
    MissingKey,

    #[error("plaintext is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),

    #[error("selftest failed: {0}")]
    SelfTest(&'static str),

    #[error(transparent)]
    Cipher(#[from] symdec::Error),
}

fn main() {
    let args = Cli::parse();

    // ref. https://github.com/env-logger-rs/env_logger/issues/47
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, args.log_level.as_str()),
    );

    if let Err(e) = run(args.command) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Decrypt(args) => decrypt(args),
        Commands::Encrypt(args) => encrypt(args),
        Commands::Selftest => selftest(),
    }
}

fn decrypt(args: DecryptArgs) -> Result<(), CliError> {
    let DecryptArgs {
        common: CommonArgs { algo, input, iv },
        key,
        unpad,
        text,
    } = args;

    let start = Instant::now();
    let plaintext_hex = match algo {
        Algo::AesCbc => {
            let iv = iv.ok_or(CliError::MissingIv)?;
            symdec::decrypt_aes_cbc(&input, &key, &iv)?
        }
        Algo::DesEcb => {
            reject_iv(iv.as_deref())?;
            symdec::decrypt_des_ecb(&input, &key)?
        }
        Algo::TdesEcb => {
            reject_iv(iv.as_deref())?;
            symdec::decrypt_tdes_ecb(&input, &key)?
        }
    };
    log::info!(
        "decrypted {} bytes in {} µs",
        plaintext_hex.len() / 2,
        start.elapsed().as_micros()
    );

    if !unpad && !text {
        println!("{plaintext_hex}");
        return Ok(());
    }

    let mut plaintext = symdec::decode_hex("plaintext", &plaintext_hex)?;
    if unpad {
        symdec::unpad_pkcs7(&mut plaintext, algo.block_size())?;
    }

    if text {
        println!("{}", String::from_utf8(plaintext)?);
    } else {
        println!("{}", symdec::encode_hex(&plaintext));
    }
    Ok(())
}

fn encrypt(args: EncryptArgs) -> Result<(), CliError> {
    let EncryptArgs {
        common: CommonArgs { algo, input, iv },
        key,
        gen_key,
        pad,
    } = args;

    let key = if gen_key {
        let key = generate_key(algo)?;
        println!("key = {key}");
        key
    } else {
        key.ok_or(CliError::MissingKey)?
    };

    let input = if pad {
        let plaintext = symdec::decode_hex("plaintext", &input)?;
        symdec::encode_hex(&symdec::pad_pkcs7(&plaintext, algo.block_size())?)
    } else {
        input
    };

    let start = Instant::now();
    let ciphertext = match algo {
        Algo::AesCbc => {
            let iv = match iv {
                Some(iv) => iv,
                None => {
                    let iv = symdec::encode_hex(&symdec::random_bytes::<{ symdec::AES_BLOCK_SIZE }>()?);
                    println!("iv = {iv}");
                    iv
                }
            };
            symdec::encrypt_aes_cbc(&input, &key, &iv)?
        }
        Algo::DesEcb => {
            reject_iv(iv.as_deref())?;
            symdec::encrypt_des_ecb(&input, &key)?
        }
        Algo::TdesEcb => {
            reject_iv(iv.as_deref())?;
            symdec::encrypt_tdes_ecb(&input, &key)?
        }
    };
    log::info!(
        "encrypted {} bytes in {} µs",
        ciphertext.len() / 2,
        start.elapsed().as_micros()
    );

    println!("{ciphertext}");
    Ok(())
}

fn selftest() -> Result<(), CliError> {
    let aes = symdec::decrypt_aes_cbc(AES_CIPHERTEXT, AES_KEY, AES_IV)?;
    check_prefix("AES-128-CBC", &aes, b"Hello World !!!!!!")?;

    let des = symdec::decrypt_des_ecb(DES_CIPHERTEXT, DES_KEY)?;
    check_prefix("DES-ECB", &des, b"hello")?;

    let report = symdec::smoke_test()?;
    log::info!("AES-EAX and PBKDF2: ok");
    println!("{report}");

    println!("selftest passed");
    Ok(())
}

fn check_prefix(name: &'static str, plaintext_hex: &str, expected: &[u8]) -> Result<(), CliError> {
    let plaintext = symdec::decode_hex("plaintext", plaintext_hex)?;
    if !plaintext.starts_with(expected) {
        log::error!("{name}: unexpected plaintext {plaintext_hex}");
        return Err(CliError::SelfTest(name));
    }
    log::info!("{name}: ok ({plaintext_hex})");
    Ok(())
}

fn generate_key(algo: Algo) -> Result<String, CliError> {
    let key = match algo {
        Algo::AesCbc => symdec::Key::rand_key_128()?.as_bytes().to_vec(),
        Algo::DesEcb => symdec::random_bytes::<8>()?.to_vec(),
        Algo::TdesEcb => symdec::random_bytes::<24>()?.to_vec(),
    };
    Ok(symdec::encode_hex(&key))
}

fn reject_iv(iv: Option<&str>) -> Result<(), CliError> {
    match iv {
        Some(_) => Err(CliError::IvInvalidAlgo),
        None => Ok(()),
    }
}
