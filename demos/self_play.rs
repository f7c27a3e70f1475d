//! Self-play driver: a random policy plays rounds against the dealer and the
//! trajectory log is printed after each round.
//!
//! Run with `RUST_LOG=bjsim=debug` to see engine events.

use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{ActionError, ActionRecord, Dealer, Participant, Player, Shoe, ShoeOptions};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const ROUNDS: usize = 5;
/// Reshuffle before a round once fewer cards than this remain.
const LOW_WATER: usize = 20;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let Ok(mut shoe) = Shoe::new(ShoeOptions::default(), seed) else {
        println!("Could not build the shoe.");
        return;
    };
    let mut policy = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));

    let mut dealer = Dealer::new();
    let mut player = Player::new();

    for round in 1..=ROUNDS {
        if shoe.len() < LOW_WATER {
            shoe.reset();
            println!("Shoe reshuffled.");
        }
        dealer.start_round();
        player.start_round();

        if let Err(err) = play_round(&mut shoe, &mut dealer, &mut player, &mut policy) {
            println!("Round {round} aborted: {err}");
            player.take_actions();
            continue;
        }

        let reward = score(&dealer, &player);
        player.assign_reward(reward);

        println!("\nRound {round}");
        println!("Dealer: {dealer}");
        println!("Player: {player}");
        println!("Reward: {reward:+}");
        print_log(&player.take_actions());
    }
}

fn play_round(
    shoe: &mut Shoe,
    dealer: &mut Dealer,
    player: &mut Player,
    policy: &mut ChaCha8Rng,
) -> Result<(), ActionError> {
    player.hit_with(shoe, false)?;
    dealer.hit(shoe)?;
    player.hit_with(shoe, false)?;
    dealer.hit(shoe)?;

    println!("\nDealer shows: {}", dealer.partial());

    while player.is_playing() {
        let action = u8::from(policy.random_bool(0.5));
        player.play(shoe, action)?;
    }

    if player.hand().total() <= 21 {
        dealer.play(shoe)?;
    }
    Ok(())
}

/// +1 for a win, -1 for a loss, 0 for a push.
fn score(dealer: &Dealer, player: &Player) -> i32 {
    let ours = player.hand().total();
    let theirs = dealer.hand().total();

    if ours > 21 {
        -1
    } else if theirs > 21 || ours > theirs {
        1
    } else if ours < theirs {
        -1
    } else {
        0
    }
}

fn print_log(log: &[ActionRecord]) {
    for record in log {
        println!(
            "  {:<5} total {:>2} soft {:<5} -> {:>2} reward {:+}",
            record.action, record.total, record.usable_ace, record.new_total, record.reward
        );
    }
}
