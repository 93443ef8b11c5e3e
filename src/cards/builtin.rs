//! The shipped card catalog.
//!
//! Art prompts and long-form lore live with the web app; only gameplay
//! fields and the short flavor line are kept here.

use super::catalog::CardCatalog;
use super::definition::CardDefinition;
use super::rarity::{CardSet, Rarity};

impl CardCatalog {
    /// The game's card catalog: the core set plus the Monad-themed set.
    ///
    /// Builtin names are unique, so every card registers. A duplicate is
    /// logged and skipped rather than taking the host down.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for card in builtin_cards() {
            if let Err(err) = catalog.register(card) {
                tracing::error!(%err, "skipped builtin card");
            }
        }
        catalog
    }
}

fn builtin_cards() -> Vec<CardDefinition> {
    use Rarity::*;

    let core = vec![
        // Commons
        CardDefinition::creature("Gas Gremlin", "Creature — Gremlin", Common, 1, 1, 1)
            .with_abilities(["Gas Efficient"])
            .with_flavor("It feeds on failed transactions."),
        CardDefinition::creature("Node Runner", "Creature — Validator", Common, 2, 2, 1)
            .with_abilities(["Front Run"])
            .with_flavor("Always first in line."),
        CardDefinition::creature("Paper Hands", "Creature — Trader", Common, 1, 1, 2)
            .with_flavor("Sold the bottom. Again."),
        CardDefinition::creature("Shill Bot", "Creature — Bot", Common, 2, 1, 2)
            .with_abilities(["Airdrop"])
            .with_flavor("100x incoming. Trust me."),
        CardDefinition::new("Pump", "Spell", Common, 1)
            .with_flavor("Number go up."),
        CardDefinition::new("Testnet", "Terrain — Sandbox", Common, 0)
            .with_flavor("Nothing here is real. Probably."),
        // Uncommons
        CardDefinition::creature("Diamond Hand Golem", "Creature — Golem", Uncommon, 3, 2, 4)
            .with_abilities(["HODL"])
            .with_flavor("It has not sold since genesis."),
        CardDefinition::creature("Yield Farmer", "Creature — Farmer", Uncommon, 3, 2, 3)
            .with_abilities(["Staking Rewards"])
            .with_flavor("Harvests twice a block."),
        CardDefinition::new("Flash Crash", "Spell", Uncommon, 2)
            .with_abilities(["Mempool Snipe"])
            .with_flavor("Seven minutes that lasted forever."),
        CardDefinition::new("Cold Wallet", "Artifact", Uncommon, 2)
            .with_abilities(["HODL"])
            .with_flavor("Offline and unbothered."),
        // Rares
        CardDefinition::creature("Rug Dragon", "Creature — Dragon", Rare, 5, 4, 4)
            .with_abilities(["Rug Pull", "Liquidation", "Front Run"])
            .with_flavor("The liquidity was never there."),
        CardDefinition::creature("MEV Searcher", "Creature — Bot", Rare, 4, 3, 3)
            .with_abilities(["MEV Extraction", "Front Run"])
            .with_flavor("Your trade, its profit."),
        CardDefinition::new("Smart Contract Exploit", "Spell — Hack", Rare, 3)
            .with_abilities(["Exploit"])
            .with_flavor("Code is law. Bugs are loopholes."),
        CardDefinition::new("Hardware Oracle", "Artifact — Oracle", Rare, 4)
            .with_abilities(["Finality"])
            .with_flavor("Truth, delivered on-chain."),
        // Legendaries
        CardDefinition::creature("Satoshi's Ghost", "Creature — Spirit", Legendary, 7, 6, 6)
            .with_abilities(["HODL", "Airdrop", "Hard Fork", "Token Burn"])
            .with_flavor("No one has seen it. Everyone believes."),
        CardDefinition::creature("Whale Leviathan", "Creature — Whale/Kaiju", Legendary, 8, 7, 7)
            .with_abilities(["Rug Pull", "Liquidation", "Flash Loan"])
            .with_flavor("When it moves, the market moves."),
        // Mythic: promotional only, never drawn from packs
        CardDefinition::creature("Genesis Block", "Creature — Origin", Mythic, 9, 9, 9)
            .with_abilities(["Finality", "Hard Fork"])
            .with_flavor("Block zero. Everything after is commentary."),
    ];

    let monad = vec![
        CardDefinition::creature("Parallel Sprite", "Creature — Sprite", Common, 1, 1, 1)
            .with_abilities(["Parallel Execution"])
            .with_flavor("Two places at once, no conflicts."),
        CardDefinition::creature("Purple Pipeline", "Creature — Construct", Common, 2, 2, 2)
            .with_flavor("Fetch, decode, execute, repeat."),
        CardDefinition::new("Optimistic Execution", "Spell", Uncommon, 2)
            .with_abilities(["Flash Loan"])
            .with_flavor("Assume success. Verify later."),
        CardDefinition::new("MonadBFT Shard", "Artifact — Consensus", Uncommon, 3)
            .with_abilities(["Finality"])
            .with_flavor("Agreement in a single round."),
        CardDefinition::creature("10k TPS Titan", "Creature — Titan", Rare, 6, 5, 5)
            .with_abilities(["Parallel Execution", "Front Run"])
            .with_flavor("Throughput made flesh."),
        CardDefinition::new("Monad Mainnet", "Terrain — Mainnet", Rare, 4)
            .with_abilities(["Staking Rewards"])
            .with_flavor("The purple dawn."),
        CardDefinition::creature("Molandak", "Creature — Mascot/Kaiju", Legendary, 7, 6, 7)
            .with_abilities(["Parallel Execution", "HODL", "Hard Fork"])
            .with_flavor("The community's chosen one."),
    ];

    core.into_iter()
        .chain(monad.into_iter().map(|c| c.in_set(CardSet::Monad)))
        .collect()
}
