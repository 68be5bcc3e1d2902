use agora_ecdh::parse::{AgreementInput, ParsedAgreementInput};
use agora_ecdh::{KeyAgreement, MultiplicationStrategy};
use structopt::StructOpt;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(StructOpt)]
#[structopt(about = "derive public keys and a shared secret from a json input file")]
struct Opt {
    #[structopt(long, help = "json file with curve parameters and two private keys")]
    input: PathBuf,
    #[structopt(long, help = "use double-and-add (k * P) instead of iterated doubling (2^k * P)")]
    double_and_add: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let opt = Opt::from_args();

    let input_file = File::open(&opt.input)
        .map_err(|e| format!("{}: {}", opt.input.display(), e))?;
    let input: AgreementInput = serde_json::from_reader(BufReader::new(input_file))?;
    let parsed: ParsedAgreementInput = input.try_into()?;

    let strategy = if opt.double_and_add {
        MultiplicationStrategy::DoubleAndAdd
    } else {
        MultiplicationStrategy::IteratedDoubling
    };
    let dh = KeyAgreement::new(parsed.curve).with_strategy(strategy);

    println!("\nprivate key 1: {}", parsed.private_key_1);
    println!("private key 2: {}", parsed.private_key_2);

    let public_key1 = dh.generate_public_key(&parsed.private_key_1)?;
    println!("\nPublic key associated with private key 1: \n{}\n", public_key1);

    let public_key2 = dh.generate_public_key(&parsed.private_key_2)?;
    println!("Public key associated with private key 2: \n{}\n", public_key2);

    let secret_pr1_pub2 = dh.secret_key(&parsed.private_key_1, &public_key2)?;
    println!("Secret key for private key 1 and public key 2: \n{}\n", secret_pr1_pub2);

    let secret_pr2_pub1 = dh.secret_key(&parsed.private_key_2, &public_key1)?;
    println!("Secret key for private key 2 and public key 1: \n{}\n", secret_pr2_pub1);

    println!("Secret keys are the same: {}\n", secret_pr1_pub2 == secret_pr2_pub1);
    Ok(())
}
