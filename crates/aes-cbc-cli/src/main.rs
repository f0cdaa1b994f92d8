//! Command-line interface for `aes-cbc`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_cbc::{decrypt, decrypt_padded, encrypt, encrypt_padded, self_test, Block, KeySize};
use aes_core::AesKey;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroizing;

/// AES-CBC CLI.
#[derive(Parser)]
#[command(
    name = "aescbc",
    version,
    author,
    about = "AES-CBC with PKCS#7 padding (confidentiality only, no authentication)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random key and IV.
    Keygen {
        /// Key size in bits (128, 192 or 256).
        #[arg(long, default_value_t = 256)]
        bits: usize,
        /// Optional RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt a file.
    Enc {
        #[command(flatten)]
        params: CipherParams,
    },
    /// Decrypt a file.
    Dec {
        #[command(flatten)]
        params: CipherParams,
    },
    /// Run the FIPS-197 and SP 800-38A known-answer tests.
    Check,
    /// Run a local demo: generate key + IV, encrypt random data, decrypt back.
    Demo {
        /// Key size in bits (128, 192 or 256).
        #[arg(long, default_value_t = 128)]
        bits: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(clap::Args)]
struct CipherParams {
    /// AES key as 32, 48 or 64 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: String,
    /// IV as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    iv_hex: String,
    /// Input file.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output file.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
    /// Skip PKCS#7 padding; input must then be a multiple of 16 bytes.
    #[arg(long, default_value_t = false)]
    no_pad: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = try_main() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Keygen { bits, seed } => cmd_keygen(bits, seed),
        Commands::Enc { params } => cmd_enc(&params),
        Commands::Dec { params } => cmd_dec(&params),
        Commands::Check => cmd_check(),
        Commands::Demo { bits, seed } => cmd_demo(bits, seed),
    }
}

fn cmd_keygen(bits: usize, seed: Option<u64>) -> Result<()> {
    let size = parse_bits(bits)?;
    let mut rng = seeded_rng(seed);
    let (key, iv) = random_key_and_iv(&mut rng, size)?;
    println!("key: {}", hex::encode(key.as_bytes()));
    println!("iv: {}", hex::encode(iv));
    Ok(())
}

fn cmd_enc(params: &CipherParams) -> Result<()> {
    let key = parse_key_hex(&params.key_hex)?;
    let iv = parse_iv_hex(&params.iv_hex)?;
    let data = read_input(&params.input)?;
    let output = if params.no_pad {
        encrypt(&data, key.as_bytes(), &iv)
    } else {
        encrypt_padded(&data, key.as_bytes(), &iv)
    }
    .context("encrypt")?;
    log::info!("encrypted {} bytes into {} bytes", data.len(), output.len());
    write_output(&params.output, &output)
}

fn cmd_dec(params: &CipherParams) -> Result<()> {
    let key = parse_key_hex(&params.key_hex)?;
    let iv = parse_iv_hex(&params.iv_hex)?;
    let data = read_input(&params.input)?;
    let output = if params.no_pad {
        decrypt(&data, key.as_bytes(), &iv)
    } else {
        decrypt_padded(&data, key.as_bytes(), &iv)
    }
    .context("decrypt")?;
    log::info!("decrypted {} bytes into {} bytes", data.len(), output.len());
    write_output(&params.output, &output)
}

fn cmd_check() -> Result<()> {
    let count = self_test().context("self-test")?;
    println!("{count} known-answer vectors passed");
    Ok(())
}

fn cmd_demo(bits: usize, seed: Option<u64>) -> Result<()> {
    let size = parse_bits(bits)?;
    let mut rng = seeded_rng(seed);
    let (key, iv) = random_key_and_iv(&mut rng, size)?;

    let mut message = vec![0u8; 40];
    rng.fill_bytes(&mut message);
    let ciphertext = encrypt_padded(&message, key.as_bytes(), &iv)?;
    let decrypted = decrypt_padded(&ciphertext, key.as_bytes(), &iv)?;

    println!("demo {size} key: {}", hex::encode(key.as_bytes()));
    println!("iv: {}", hex::encode(iv));
    println!("plaintext: {}", hex::encode(&message));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != message {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_bits(bits: usize) -> Result<KeySize> {
    if bits % 8 != 0 {
        bail!("key size must be 128, 192 or 256 bits");
    }
    KeySize::from_len(bits / 8).context("key size must be 128, 192 or 256 bits")
}

fn decode_secret_hex(hex_str: &str) -> Result<Zeroizing<Vec<u8>>> {
    let mut bytes = Zeroizing::new(vec![0u8; hex_str.trim().len() / 2]);
    hex::decode_to_slice(hex_str.trim(), bytes.as_mut_slice()).context("decode key hex")?;
    Ok(bytes)
}

fn parse_key_hex(hex_str: &str) -> Result<AesKey> {
    let bytes = decode_secret_hex(hex_str)?;
    AesKey::from_slice(&bytes).context("AES key must be 16, 24 or 32 bytes")
}

fn parse_iv_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode IV hex")?;
    match Block::try_from(bytes.as_slice()) {
        Ok(iv) => Ok(iv),
        Err(_) => bail!("IV must be 16 bytes (32 hex characters)"),
    }
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read {}", path.display()))
}

fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).with_context(|| format!("write {}", path.display()))
}

fn random_key_and_iv(rng: &mut impl RngCore, size: KeySize) -> Result<(AesKey, Block)> {
    let mut key_bytes = Zeroizing::new(vec![0u8; size.key_bytes()]);
    let mut iv = [0u8; 16];
    rng.fill_bytes(key_bytes.as_mut_slice());
    rng.fill_bytes(&mut iv);
    let key = AesKey::from_slice(&key_bytes)?;
    Ok((key, iv))
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}
