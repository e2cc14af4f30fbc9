// Fixture tooling for the BluesCrypto staking program:
// provisions a mint and token accounts, bootstraps the program
// and exercises the escrow charge.

#[macro_use]
extern crate lazy_static;

mod balance;
mod journal;

use bluescrypto_staking_interface::{
    error::StakingError,
    find_escrow_vault_address, find_staking_storage_address, instruction,
    state::StakingStorage,
    token::{self, unpack_amount},
    DEFAULT_ESCROW_ALLOWANCE, DEFAULT_ESCROW_CHARGE, DEFAULT_INITIAL_SUPPLY,
    DEFAULT_MINT_DECIMALS,
};
use clap::{
    crate_description, crate_name, crate_version, value_t, value_t_or_exit, App, AppSettings, Arg,
    ArgMatches, SubCommand,
};
use log::{debug, info, warn};
use solana_clap_utils::{
    input_parsers::pubkey_of,
    input_validators::{is_parsable, is_pubkey, is_url, is_valid_signer},
    keypair::signer_from_path,
};
use solana_client::{client_error::ClientError, rpc_client::RpcClient};
use solana_program::{instruction::Instruction, program_pack::Pack, pubkey::Pubkey};
use solana_sdk::{
    account::from_account,
    clock::Clock,
    commitment_config::CommitmentConfig,
    native_token::*,
    signature::{Keypair, Signature, Signer},
    sysvar,
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;
use spl_token::state::{Account as TokenAccount, Mint};
use std::{path::Path, process::exit};

use balance::get_token_balance;
use journal::{Journal, StepKind, Target};

struct Config {
    rpc_client: RpcClient,
    verbose: bool,
    owner: Box<dyn Signer>,
    fee_payer: Box<dyn Signer>,
    commitment_config: CommitmentConfig,

    program_id: Pubkey,
}

type Error = Box<dyn std::error::Error>;
type CommandResult = Result<(), Error>;

lazy_static! {
    static ref DEFAULT_DECIMALS_ARG: String = DEFAULT_MINT_DECIMALS.to_string();
    static ref DEFAULT_SUPPLY_ARG: String = DEFAULT_INITIAL_SUPPLY.to_string();
    static ref DEFAULT_ALLOWANCE_ARG: String = DEFAULT_ESCROW_ALLOWANCE.to_string();
    static ref DEFAULT_CHARGE_ARG: String = DEFAULT_ESCROW_CHARGE.to_string();
}

macro_rules! unique_signers {
    ($vec:ident) => {
        $vec.sort_by_key(|l| l.pubkey());
        $vec.dedup();
    };
}

/// Parameters shared by the `mint` and `live` workflows
struct FixtureOptions {
    mint: Option<Pubkey>,
    decimals: u8,
    supply: u64,
    allowance: u64,
    charge: u64,
}

fn check_fee_payer_balance(config: &Config, required_balance: u64) -> Result<(), Error> {
    let balance = config.rpc_client.get_balance(&config.fee_payer.pubkey())?;
    if balance < required_balance {
        Err(format!(
            "Fee payer, {}, has insufficient balance: {} required, {} available",
            config.fee_payer.pubkey(),
            lamports_to_sol(required_balance),
            lamports_to_sol(balance)
        )
        .into())
    } else {
        Ok(())
    }
}

/// Signs with every configured signer the message requires, sends and waits for confirmation
fn send_transaction(
    config: &Config,
    instructions: &[Instruction],
    extra_signers: &[&(dyn Signer + 'static)],
    total_rent_free_balances: u64,
) -> Result<Signature, Error> {
    let mut transaction =
        Transaction::new_with_payer(instructions, Some(&config.fee_payer.pubkey()));

    let recent_blockhash = config.rpc_client.get_latest_blockhash()?;
    transaction.message.recent_blockhash = recent_blockhash;
    let fee = config.rpc_client.get_fee_for_message(&transaction.message)?;
    check_fee_payer_balance(config, total_rent_free_balances + fee)?;

    let required: Vec<Pubkey> = transaction
        .message
        .signer_keys()
        .into_iter()
        .copied()
        .collect();
    let mut signers: Vec<&dyn Signer> = vec![config.fee_payer.as_ref(), config.owner.as_ref()];
    signers.extend_from_slice(extra_signers);
    signers.retain(|signer| required.contains(&signer.pubkey()));
    unique_signers!(signers);
    transaction.try_sign(&signers, recent_blockhash)?;

    let signature = config
        .rpc_client
        .send_and_confirm_transaction_with_spinner_and_commitment(
            &transaction,
            config.commitment_config,
        )?;
    info!("Signature: {}", signature);
    if config.verbose {
        println!("Signature: {}", signature);
    }
    Ok(signature)
}

fn create_mint(config: &Config, decimals: u8) -> Result<(Pubkey, Signature), Error> {
    let mint_account = Keypair::new();
    println!("Creating mint {}", mint_account.pubkey());

    let mint_account_balance = config
        .rpc_client
        .get_minimum_balance_for_rent_exemption(Mint::LEN)?;

    let instructions = token::create_mint(
        &config.fee_payer.pubkey(),
        &mint_account.pubkey(),
        &config.owner.pubkey(),
        decimals,
        mint_account_balance,
    )?;

    let signature = send_transaction(config, &instructions, &[&mint_account], mint_account_balance)?;
    Ok((mint_account.pubkey(), signature))
}

/// Finds the associated token account of `owner`, creating it when absent
fn get_or_create_associated_account(
    config: &Config,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, Error> {
    let (address, create_instruction) =
        token::create_associated_account(&config.fee_payer.pubkey(), owner, mint);

    let existing = config
        .rpc_client
        .get_account_with_commitment(&address, config.commitment_config)?
        .value;

    match existing {
        Some(account) => {
            if account.owner != spl_token::id() {
                return Err(format!("{} is not a token account", address).into());
            }
            let account_data = TokenAccount::unpack(&account.data)?;
            if account_data.mint != *mint || account_data.owner != *owner {
                return Err("Wrong token account.".into());
            }
            debug!("Reusing token account {} of {}", address, owner);
        }
        None => {
            let account_balance = config
                .rpc_client
                .get_minimum_balance_for_rent_exemption(TokenAccount::LEN)?;
            println!("Creating token account {} for {}", address, owner);
            send_transaction(config, &[create_instruction], &[], account_balance)?;
        }
    }
    Ok(address)
}

fn get_staking_storage(config: &Config) -> Result<StakingStorage, Error> {
    let (staking_storage, _) = find_staking_storage_address(&config.program_id);
    let data = config.rpc_client.get_account_data(&staking_storage)?;
    Ok(StakingStorage::unpack(&data)?)
}

/// Mint supplied on the command line, recorded by an earlier run, or freshly created
fn provision_mint(
    config: &Config,
    journal: &mut Journal,
    options: &FixtureOptions,
) -> Result<Pubkey, Error> {
    if let Some(mint) = options.mint {
        return Ok(mint);
    }
    if let Some(mint) = journal.mint()? {
        warn!("Resuming with mint {} from the journal", mint);
        return Ok(mint);
    }
    let (mint, signature) = create_mint(config, options.decimals)?;
    journal.record(StepKind::CreateMint, &mint, None, &signature)?;
    Ok(mint)
}

/// A fixture step and whether the journal already holds it for the current mint
#[derive(Clone, Copy, Debug, PartialEq)]
struct PlannedStep {
    kind: StepKind,
    recorded: bool,
}

/// Steps that follow mint provisioning, in execution order
fn plan_fixture(
    journal: &Journal,
    mint: &Pubkey,
    bootstrap_program: bool,
) -> Vec<PlannedStep> {
    let kinds: &[StepKind] = if bootstrap_program {
        &[
            StepKind::MintTo,
            StepKind::Initialize,
            StepKind::Approve,
            StepKind::ChargeEscrow,
        ]
    } else {
        &[StepKind::MintTo]
    };
    kinds
        .iter()
        .map(|&kind| PlannedStep {
            kind,
            recorded: journal.completed(kind, mint).is_some(),
        })
        .collect()
}

fn run_step(
    config: &Config,
    journal: &mut Journal,
    step: PlannedStep,
    mint: &Pubkey,
    amount: Option<u64>,
    instruction: Instruction,
) -> CommandResult {
    if step.recorded {
        debug!("Skipping {}, already recorded for mint {}", step.kind, mint);
        return Ok(());
    }
    let signature = send_transaction(config, &[instruction], &[], 0)?;
    journal.record(step.kind, mint, amount, &signature)
}

fn command_fixture(
    config: &Config,
    journal: &mut Journal,
    options: &FixtureOptions,
    bootstrap_program: bool,
) -> CommandResult {
    let owner = config.owner.pubkey();
    let (staking_storage, _) = find_staking_storage_address(&config.program_id);

    let mint = provision_mint(config, journal, options)?;
    let (escrow_vault, _) = find_escrow_vault_address(&config.program_id, &mint);

    if config.verbose {
        println!("Journal entries: {}", journal.entries().len());
        println!("Program: {}", config.program_id);
        println!("Staking storage: {}", staking_storage);
    }

    let token_account = get_or_create_associated_account(config, &owner, &mint)?;
    let program_token_account = if bootstrap_program {
        Some(get_or_create_associated_account(
            config,
            &config.program_id,
            &mint,
        )?)
    } else {
        None
    };

    for step in plan_fixture(journal, &mint, bootstrap_program) {
        match step.kind {
            StepKind::MintTo => {
                let mint_to = token::mint_to(&mint, &token_account, &owner, options.supply)?;
                run_step(config, journal, step, &mint, Some(options.supply), mint_to)?;

                let balance =
                    get_token_balance(&config.rpc_client, &owner, &mint, config.commitment_config)?;
                println!("Mint: {}", mint);
                println!("Wallet: {}", owner);
                println!("Wallet ATA: {}", token_account);
                println!("Balance: {}", balance);
                if let Some(program_token_account) = program_token_account {
                    println!("Escrow: {}", escrow_vault);
                    println!("Staking program ATA: {}", program_token_account);
                }
            }
            StepKind::Initialize => {
                let initialize = instruction::initialize(&config.program_id, &owner, &mint)?;
                run_step(config, journal, step, &mint, None, initialize)?;
                println!("initialized");
            }
            StepKind::Approve => {
                let approve =
                    token::approve(&token_account, &escrow_vault, &owner, options.allowance)?;
                run_step(config, journal, step, &mint, Some(options.allowance), approve)?;
                println!("token approved");
            }
            StepKind::ChargeEscrow => {
                let balance = get_token_balance(
                    &config.rpc_client,
                    &escrow_vault,
                    &mint,
                    config.commitment_config,
                )?;
                println!("escrow balance before charge: {}", balance);

                let charge_escrow = instruction::charge_escrow(
                    &config.program_id,
                    &token_account,
                    &owner,
                    &mint,
                    options.charge,
                )?;
                run_step(config, journal, step, &mint, Some(options.charge), charge_escrow)?;
                println!("escrow charged");

                let balance = get_token_balance(
                    &config.rpc_client,
                    &escrow_vault,
                    &mint,
                    config.commitment_config,
                )?;
                println!("escrow balance after charge: {}", balance);
            }
            StepKind::CreateMint => {}
        }
    }

    Ok(())
}

fn command_balance(config: &Config, owner: &Pubkey, mint: &Pubkey) -> CommandResult {
    let balance = get_token_balance(&config.rpc_client, owner, mint, config.commitment_config)?;
    println!("Balance: {}", balance);
    Ok(())
}

fn command_storage(config: &Config) -> CommandResult {
    let (staking_storage, _) = find_staking_storage_address(&config.program_id);
    println!("Program {}", config.program_id);
    println!("Storage {}", staking_storage);

    let storage = get_staking_storage(config)?;

    println!("Packages ({})", storage.packages.len());
    println!("----------------");
    for (index, package) in storage.packages.iter().enumerate() {
        println!(
            "{}\t{}\tmax deposit:{}\tapr:{}\tperiod:{}s\tslots:{}/{}",
            index,
            package.name,
            package.max_deposit_amount,
            package.apr,
            package.period,
            package.slot_count,
            package.slot_limit
        );
    }

    println!("Stakes ({})", storage.stake_logs.len());
    println!("----------------");
    for log in &storage.stake_logs {
        println!(
            "{}\tpackage:{}\tsince:{}\t{}",
            log.staker,
            log.package_index,
            log.stake_timestamp,
            if log.terminated { "terminated" } else { "active" }
        );
    }
    Ok(())
}

fn command_stake(config: &Config, mint: &Pubkey, package_index: u8, amount: u64) -> CommandResult {
    let storage = get_staking_storage(config)?;
    let package = storage
        .packages
        .get(package_index as usize)
        .ok_or_else(|| {
            format!(
                "Package {} does not exist, the program offers {} packages.",
                package_index,
                storage.packages.len()
            )
        })?;
    if amount > package.max_deposit_amount {
        return Err(format!(
            "Deposit of {} is over the {} maximum of {}.",
            amount, package.name, package.max_deposit_amount
        )
        .into());
    }
    if package.is_full() {
        return Err(format!("Every slot of {} is taken.", package.name).into());
    }

    let owner = config.owner.pubkey();
    let from = get_associated_token_address(&owner, mint);
    if storage.active_stake(&from, package_index).is_some() {
        return Err(format!("{} already staked on {}.", from, package.name).into());
    }

    println!("Staking {} from {} into {}", amount, from, package.name);
    send_transaction(
        config,
        &[instruction::stake(
            &config.program_id,
            &from,
            &owner,
            mint,
            package_index,
            amount,
        )?],
        &[],
        0,
    )?;
    println!("staked");
    Ok(())
}

fn command_withdraw(config: &Config, mint: &Pubkey, package_index: u8) -> CommandResult {
    let storage = get_staking_storage(config)?;
    let owner = config.owner.pubkey();
    let to = get_associated_token_address(&owner, mint);

    let clock_account = config.rpc_client.get_account(&sysvar::clock::id())?;
    let clock: Clock = from_account(&clock_account).ok_or("Unable to decode the cluster clock")?;
    let log = storage
        .check_withdraw(&to, package_index, clock.unix_timestamp)
        .map_err(|err| format!("Cannot withdraw {} from package {}: {}", to, package_index, err))?;
    debug!("Stake of {} made at {}", to, log.stake_timestamp);

    let balance_before = unpack_amount(&config.rpc_client.get_account_data(&to)?)?;
    send_transaction(
        config,
        &[instruction::withdraw(
            &config.program_id,
            &to,
            &owner,
            mint,
            package_index,
        )?],
        &[],
        0,
    )?;
    let balance_after = unpack_amount(&config.rpc_client.get_account_data(&to)?)?;
    println!("withdrawn {}", balance_after.saturating_sub(balance_before));
    Ok(())
}

fn fixture_options(arg_matches: &ArgMatches, bootstrap_program: bool) -> FixtureOptions {
    FixtureOptions {
        mint: pubkey_of(arg_matches, "mint"),
        decimals: value_t_or_exit!(arg_matches, "decimals", u8),
        supply: value_t_or_exit!(arg_matches, "amount", u64),
        allowance: if bootstrap_program {
            value_t_or_exit!(arg_matches, "allowance", u64)
        } else {
            DEFAULT_ESCROW_ALLOWANCE
        },
        charge: if bootstrap_program {
            value_t_or_exit!(arg_matches, "charge", u64)
        } else {
            DEFAULT_ESCROW_CHARGE
        },
    }
}

fn fixture_args<'a, 'b>(command: App<'a, 'b>) -> App<'a, 'b> {
    command
        .arg(
            Arg::with_name("mint")
                .long("mint")
                .validator(is_pubkey)
                .value_name("ADDRESS")
                .takes_value(true)
                .help("Existing mint to use instead of creating one. The wallet must be its mint authority."),
        )
        .arg(
            Arg::with_name("decimals")
                .long("decimals")
                .validator(is_parsable::<u8>)
                .value_name("DECIMALS")
                .takes_value(true)
                .default_value(&DEFAULT_DECIMALS_ARG)
                .help("Decimals of the created mint."),
        )
        .arg(
            Arg::with_name("amount")
                .long("amount")
                .validator(is_parsable::<u64>)
                .value_name("AMOUNT")
                .takes_value(true)
                .default_value(&DEFAULT_SUPPLY_ARG)
                .help("Base units minted into the wallet token account on every run."),
        )
}

fn main() {
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg({
            let arg = Arg::with_name("config_file")
                .short("C")
                .long("config")
                .value_name("PATH")
                .takes_value(true)
                .global(true)
                .help("Configuration file to use");
            if let Some(ref config_file) = *solana_cli_config::CONFIG_FILE {
                arg.default_value(config_file)
            } else {
                arg
            }
        })
        .arg(
            Arg::with_name("verbose")
                .long("verbose")
                .short("v")
                .takes_value(false)
                .global(true)
                .help("Show additional information"),
        )
        .arg(
            Arg::with_name("json_rpc_url")
                .long("url")
                .value_name("URL")
                .takes_value(true)
                .global(true)
                .validator(is_url)
                .help("JSON RPC URL for the cluster.  Default from the configuration file."),
        )
        .arg(
            Arg::with_name("commitment")
                .long("commitment")
                .value_name("LEVEL")
                .takes_value(true)
                .global(true)
                .possible_values(&["processed", "confirmed", "finalized"])
                .help("Commitment used for reads and confirmations. Default from the configuration file."),
        )
        .arg(
            Arg::with_name("keypair")
                .long("keypair")
                .value_name("KEYPAIR")
                .validator(is_valid_signer)
                .takes_value(true)
                .global(true)
                .help("Wallet owning the mint and token accounts. Defaults to the client keypair."),
        )
        .arg(
            Arg::with_name("fee_payer")
                .long("fee-payer")
                .value_name("KEYPAIR")
                .validator(is_valid_signer)
                .takes_value(true)
                .global(true)
                .help("Transaction fee payer account. Defaults to the client keypair."),
        )
        .arg(
            Arg::with_name("program_id")
                .long("program-id")
                .value_name("ADDRESS")
                .validator(is_pubkey)
                .takes_value(true)
                .global(true)
                .help("Staking program id. Defaults to the deployed program."),
        )
        .arg(
            Arg::with_name("journal")
                .long("journal")
                .value_name("PATH")
                .takes_value(true)
                .global(true)
                .help("Record completed steps in this file and skip them on the next run."),
        )
        .subcommand(fixture_args(
            SubCommand::with_name("mint")
                .about("Create a mint and fund the wallet token account"),
        ))
        .subcommand(
            fixture_args(
                SubCommand::with_name("live")
                    .about("Create a mint, initialize the staking program and charge its escrow"),
            )
            .arg(
                Arg::with_name("allowance")
                    .long("allowance")
                    .validator(is_parsable::<u64>)
                    .value_name("AMOUNT")
                    .takes_value(true)
                    .default_value(&DEFAULT_ALLOWANCE_ARG)
                    .help("Base units the escrow vault is approved to move."),
            )
            .arg(
                Arg::with_name("charge")
                    .long("charge")
                    .validator(is_parsable::<u64>)
                    .value_name("AMOUNT")
                    .takes_value(true)
                    .default_value(&DEFAULT_CHARGE_ARG)
                    .help("Base units moved into the escrow vault."),
            ),
        )
        .subcommand(SubCommand::with_name("balance").about("Show the token balance of an owner")
            .arg(
                Arg::with_name("mint")
                    .long("mint")
                    .validator(is_pubkey)
                    .value_name("ADDRESS")
                    .takes_value(true)
                    .required(true)
                    .help("Token mint."),
            )
            .arg(
                Arg::with_name("owner")
                    .long("owner")
                    .validator(is_pubkey)
                    .value_name("ADDRESS")
                    .takes_value(true)
                    .help("Owner of the token account. Defaults to the wallet."),
            )
        )
        .subcommand(SubCommand::with_name("storage").about("List packages and stakes kept by the staking program"))
        .subcommand(SubCommand::with_name("stake").about("Stake tokens from the wallet token account into a package")
            .arg(
                Arg::with_name("mint")
                    .long("mint")
                    .validator(is_pubkey)
                    .value_name("ADDRESS")
                    .takes_value(true)
                    .required(true)
                    .help("Mint the program was initialized with."),
            )
            .arg(
                Arg::with_name("package")
                    .long("package")
                    .validator(is_parsable::<u8>)
                    .value_name("INDEX")
                    .takes_value(true)
                    .required(true)
                    .help("Package index."),
            )
            .arg(
                Arg::with_name("amount")
                    .long("amount")
                    .validator(is_parsable::<u64>)
                    .value_name("AMOUNT")
                    .takes_value(true)
                    .required(true)
                    .help("Base units to stake."),
            )
        )
        .subcommand(SubCommand::with_name("withdraw").about("Collect the reward of a finished stake")
            .arg(
                Arg::with_name("mint")
                    .long("mint")
                    .validator(is_pubkey)
                    .value_name("ADDRESS")
                    .takes_value(true)
                    .required(true)
                    .help("Mint the program was initialized with."),
            )
            .arg(
                Arg::with_name("package")
                    .long("package")
                    .validator(is_parsable::<u8>)
                    .value_name("INDEX")
                    .takes_value(true)
                    .required(true)
                    .help("Package index."),
            )
        )
        .get_matches();

    let mut wallet_manager = None;
    let config = {
        let cli_config = if let Some(config_file) = matches.value_of("config_file") {
            solana_cli_config::Config::load(config_file).unwrap_or_default()
        } else {
            solana_cli_config::Config::default()
        };
        let json_rpc_url = value_t!(matches, "json_rpc_url", String)
            .unwrap_or_else(|_| cli_config.json_rpc_url.clone());
        let commitment = matches
            .value_of("commitment")
            .unwrap_or(&cli_config.commitment);
        let commitment_config: CommitmentConfig = commitment.parse().unwrap_or_else(|e| {
            eprintln!("error: invalid commitment {}: {}", commitment, e);
            exit(1);
        });

        let owner = signer_from_path(
            &matches,
            matches
                .value_of("keypair")
                .unwrap_or(&cli_config.keypair_path),
            "keypair",
            &mut wallet_manager,
        )
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            exit(1);
        });
        let fee_payer = signer_from_path(
            &matches,
            matches
                .value_of("fee_payer")
                .unwrap_or(&cli_config.keypair_path),
            "fee_payer",
            &mut wallet_manager,
        )
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            exit(1);
        });
        let verbose = matches.is_present("verbose");
        let program_id =
            pubkey_of(&matches, "program_id").unwrap_or_else(bluescrypto_staking_interface::id);

        Config {
            rpc_client: RpcClient::new_with_commitment(json_rpc_url, commitment_config),
            verbose,
            owner,
            fee_payer,
            commitment_config,

            program_id,
        }
    };

    solana_logger::setup_with_default("solana=info,staking_fixture=info");

    let target = Target {
        cluster: config.rpc_client.url(),
        program_id: config.program_id,
    };
    let mut journal = match matches.value_of("journal") {
        Some(path) => Journal::open(Path::new(path), target),
        None => Ok(Journal::disabled(target)),
    }
    .unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        exit(1);
    });

    let _ = match matches.subcommand() {
        ("mint", Some(arg_matches)) => {
            let options = fixture_options(arg_matches, false);
            command_fixture(&config, &mut journal, &options, false)
        }
        ("live", Some(arg_matches)) => {
            let options = fixture_options(arg_matches, true);
            command_fixture(&config, &mut journal, &options, true)
        }
        ("balance", Some(arg_matches)) => {
            let mint: Pubkey = pubkey_of(arg_matches, "mint").unwrap();
            let owner: Pubkey =
                pubkey_of(arg_matches, "owner").unwrap_or_else(|| config.owner.pubkey());
            command_balance(&config, &owner, &mint)
        }
        ("storage", Some(_arg_matches)) => command_storage(&config),
        ("stake", Some(arg_matches)) => {
            let mint: Pubkey = pubkey_of(arg_matches, "mint").unwrap();
            let package_index = value_t_or_exit!(arg_matches, "package", u8);
            let amount = value_t_or_exit!(arg_matches, "amount", u64);
            command_stake(&config, &mint, package_index, amount)
        }
        ("withdraw", Some(arg_matches)) => {
            let mint: Pubkey = pubkey_of(arg_matches, "mint").unwrap();
            let package_index = value_t_or_exit!(arg_matches, "package", u8);
            command_withdraw(&config, &mint, package_index)
        }
        _ => unreachable!(),
    }
    .map_err(|err| {
        eprintln!("{}", err);
        if let Some(program_error) = program_error_of(err.as_ref()) {
            eprintln!("Program error: {}", program_error);
        }
        exit(1);
    });
}

/// Staking program error carried by a failed RPC call, if any
fn program_error_of(err: &(dyn std::error::Error + 'static)) -> Option<StakingError> {
    let transaction_error = err.downcast_ref::<ClientError>()?.get_transaction_error()?;
    StakingError::from_transaction_error(&transaction_error, None)
}
