//! CLI tool for deploying and interacting with the staking ledger contract.

use pooled_staking_contracts::ledger::StakingLedger;
use odra::casper_types::U512;
use odra::host::HostEnv;
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Deploys the StakingLedger contract with the deployer as the team.
pub struct LedgerDeployScript;

impl DeployScript for LedgerDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use pooled_staking_contracts::ledger::staking_ledger::StakingLedgerInitArgs;

        let team = env.caller();
        let _ledger = StakingLedger::load_or_deploy(
            &env,
            StakingLedgerInitArgs { team },
            container,
            350_000_000_000 // Gas limit for ledger deployment
        )?;

        Ok(())
    }
}

fn amount_arg() -> CommandArg {
    CommandArg::new(
        "amount",
        "Amount of motes to attach",
        NamedCLType::U512,
    )
}

/// Scenario to deposit into the pool.
pub struct DepositScenario;

impl Scenario for DepositScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![amount_arg()]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let ledger = container.contract_ref::<StakingLedger>(env)?;
        let amount = args.get_single::<U512>("amount")?;

        env.set_gas(5_000_000_000);
        ledger.with_tokens(amount).try_deposit()?;

        println!("Deposited {} motes", amount);
        Ok(())
    }
}

impl ScenarioMetadata for DepositScenario {
    const NAME: &'static str = "deposit";
    const DESCRIPTION: &'static str = "Deposits the given amount into the staking pool";
}

/// Scenario to distribute rewards to the current stakers.
pub struct DistributeScenario;

impl Scenario for DistributeScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![amount_arg()]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let ledger = container.contract_ref::<StakingLedger>(env)?;
        let amount = args.get_single::<U512>("amount")?;

        // One stake update per staker
        env.set_gas(50_000_000_000);
        ledger.with_tokens(amount).try_distribute()?;

        println!("Distributed {} motes, {} left unattributed", amount, ledger.get_undistributed_remainder());
        Ok(())
    }
}

impl ScenarioMetadata for DistributeScenario {
    const NAME: &'static str = "distribute";
    const DESCRIPTION: &'static str = "Distributes rewards to all current stakers (team only)";
}

/// Scenario to withdraw the caller's whole stake.
pub struct WithdrawScenario;

impl Scenario for WithdrawScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let mut ledger = container.contract_ref::<StakingLedger>(env)?;
        let stake = ledger.stake_of(env.caller());

        env.set_gas(5_000_000_000);
        ledger.try_withdraw()?;

        println!("Withdrew {} motes", stake);
        Ok(())
    }
}

impl ScenarioMetadata for WithdrawScenario {
    const NAME: &'static str = "withdraw";
    const DESCRIPTION: &'static str = "Withdraws the caller's stake including rewards";
}

/// Scenario to print the pool totals.
pub struct PoolStatusScenario;

impl Scenario for PoolStatusScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        _args: Args
    ) -> Result<(), Error> {
        let ledger = container.contract_ref::<StakingLedger>(env)?;

        println!("Team:            {:?}", ledger.get_team());
        println!("Stakers:         {}", ledger.get_staker_count());
        println!("Total pool:      {}", ledger.get_total_pool_balance());
        println!("Total stake:     {}", ledger.get_total_stake_balance());
        println!("Unattributed:    {}", ledger.get_undistributed_remainder());
        println!("Caller stake:    {}", ledger.stake_of(env.caller()));
        Ok(())
    }
}

impl ScenarioMetadata for PoolStatusScenario {
    const NAME: &'static str = "pool-status";
    const DESCRIPTION: &'static str = "Prints the pool and stake totals";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the pooled staking ledger contract")
        // Deploy scripts
        .deploy(LedgerDeployScript)
        // Contract references
        .contract::<StakingLedger>()
        // Scenarios
        .scenario(DepositScenario)
        .scenario(DistributeScenario)
        .scenario(WithdrawScenario)
        .scenario(PoolStatusScenario)
        .build()
        .run();
}
