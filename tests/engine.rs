//! Engine integration tests.

use std::collections::HashMap;

use bjsim::{
    Action, ActionError, ActionRecord, Card, CardSource, ConfigError, DECK_SIZE, Dealer, Hand,
    Participant, ParticipantState, Player, Rank, SharedShoe, Shoe, ShoeError, ShoeOptions, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Yields `draws` in order, then runs dry.
struct Stacked(Vec<Card>);

impl Stacked {
    fn new(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self(cards)
    }
}

impl CardSource for Stacked {
    fn draw(&mut self) -> Result<Card, ShoeError> {
        self.0.pop().ok_or(ShoeError::Exhausted)
    }
}

/// Never runs out of fives.
struct Fives;

impl CardSource for Fives {
    fn draw(&mut self) -> Result<Card, ShoeError> {
        Ok(card(Suit::Hearts, Rank::Five))
    }
}

#[test]
fn non_ace_totals_sum_single_values() {
    let mut hand = Hand::new();
    let mut expected = 0;
    for rank in Rank::ALL.into_iter().filter(|rank| !rank.is_ace()) {
        assert_eq!(rank.values().len(), 1);
        expected += u16::from(rank.values()[0]);
        hand.add_card(card(Suit::Clubs, rank));
    }
    hand.add_card(card(Suit::Clubs, Rank::Ace));

    assert_eq!(hand.total_without_ace(), expected);
    assert_eq!(hand.n_aces(), 1);
    assert!(!hand.usable_ace());
    assert_eq!(hand.total(), expected + 1);
}

#[test]
fn fresh_six_deck_shoe_composition() {
    let shoe = Shoe::new(ShoeOptions::default(), 11).unwrap();
    assert_eq!(shoe.len(), 312);
    assert_eq!(shoe.decks(), 6);

    let mut per_rank: HashMap<Rank, usize> = HashMap::new();
    for card in shoe.cards() {
        *per_rank.entry(card.rank).or_default() += 1;
    }
    assert_eq!(per_rank.len(), 13);
    assert!(per_rank.values().all(|&count| count == 24));
}

#[test]
fn drawing_empties_the_shoe_then_fails() {
    let mut shoe = Shoe::new(ShoeOptions::default(), 5).unwrap();
    let mut per_card: HashMap<Card, usize> = HashMap::new();

    for drawn in 1..=312 {
        let card = shoe.draw().unwrap();
        *per_card.entry(card).or_default() += 1;
        assert_eq!(shoe.len(), 312 - drawn);
    }

    assert_eq!(per_card.len(), DECK_SIZE);
    assert!(per_card.values().all(|&count| count == 6));
    assert!(shoe.is_empty());
    assert_eq!(shoe.draw().unwrap_err(), ShoeError::Exhausted);

    shoe.reset();
    assert_eq!(shoe.len(), 312);
}

#[test]
fn zero_deck_shoe_is_a_config_error() {
    let err = Shoe::new(ShoeOptions::default().with_decks(0), 1).unwrap_err();
    assert_eq!(err, ConfigError::NoDecks);
}

#[test]
fn dealer_hits_fives_until_seventeen() {
    let mut dealer = Dealer::new();
    assert_eq!(dealer.hand().total(), 0);

    let drawn = dealer.play(&mut Fives).unwrap();
    assert_eq!(drawn.len(), 4);
    assert_eq!(dealer.hand().total(), 20);
    assert!(!dealer.is_playing());
    assert_eq!(dealer.state(), ParticipantState::Stopped);
}

#[test]
fn dealer_plays_from_a_real_shoe() {
    let mut shoe = Shoe::new(ShoeOptions::default().with_decks(1), 99).unwrap();
    let mut dealer = Dealer::new();
    dealer.play(&mut shoe).unwrap();

    assert!(dealer.hand().total() >= 17);
    assert_eq!(shoe.len(), DECK_SIZE - dealer.hand().len());
}

#[test]
fn invalid_action_leaves_player_untouched() {
    let mut source = Stacked::new(&[card(Suit::Spades, Rank::Nine)]);
    let mut player = Player::new();
    player.play(&mut source, 1).unwrap();
    let before = player.clone();

    assert_eq!(
        player.play(&mut source, 2).unwrap_err(),
        ActionError::InvalidAction(2)
    );
    assert_eq!(player, before);
    assert_eq!(player.actions().len(), 1);
}

#[test]
fn hit_then_stand_trajectory() {
    let mut source = Stacked::new(&[
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Clubs, Rank::Ace),
    ]);
    let mut player = Player::new();
    player.hit_with(&mut source, false).unwrap();
    player.hit_with(&mut source, false).unwrap();

    player.play(&mut source, 1).unwrap();
    player.play(&mut source, 0).unwrap();

    let log = player.actions();
    assert_eq!(log.len(), 2);
    assert_eq!(
        log[0],
        ActionRecord {
            action: Action::Hit,
            total: 13,
            usable_ace: false,
            new_total: 14,
            reward: 0,
        }
    );
    assert_eq!(log[1].action, Action::Stand);
    assert_eq!(log[0].new_total, log[1].total);
    assert_eq!(log[1].new_total, log[1].total);
    assert!(!player.is_playing());
}

#[test]
fn twenty_one_and_bust_both_stop_the_player() {
    let mut source = Stacked::new(&[
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::Ace),
    ]);
    let mut player = Player::new();
    player.hit(&mut source).unwrap();
    assert!(player.is_playing());
    player.hit(&mut source).unwrap();
    assert_eq!(player.hand().total(), 21);
    assert!(!player.is_playing());

    let mut source = Stacked::new(&[
        card(Suit::Spades, Rank::King),
        card(Suit::Hearts, Rank::Queen),
        card(Suit::Clubs, Rank::Two),
    ]);
    let mut player = Player::new();
    for _ in 0..3 {
        player.hit(&mut source).unwrap();
    }
    assert_eq!(player.hand().total(), 22);
    assert!(!player.is_playing());
}

#[test]
fn clear_hand_empties_without_resuming() {
    let mut shoe = Shoe::new(ShoeOptions::default(), 3).unwrap();
    let mut player = Player::new();
    player.hit(&mut shoe).unwrap();
    player.stand();

    player.clear_hand();
    assert!(player.hand().is_empty());
    assert_eq!(player.hand().n_aces(), 0);
    assert_eq!(player.hand().total(), 0);
    assert!(!player.is_playing());

    player.start_round();
    assert!(player.is_playing());
}

#[test]
fn shared_shoe_serves_both_participants() {
    let shared = SharedShoe::new(Shoe::new(ShoeOptions::default().with_decks(1), 8).unwrap());
    let mut dealer = Dealer::new();
    let mut player = Player::new();

    player.hit_with(&mut &shared, false).unwrap();
    dealer.hit(&mut &shared).unwrap();
    player.hit_with(&mut &shared, false).unwrap();
    dealer.hit(&mut &shared).unwrap();

    assert_eq!(shared.len(), DECK_SIZE - 4);
    assert!(dealer.partial_total().is_some());
}

#[test]
fn shared_shoe_across_threads() {
    let shared = SharedShoe::new(Shoe::new(ShoeOptions::default(), 21).unwrap());

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    shared.draw().unwrap();
                }
            });
        }
    });

    assert_eq!(shared.len(), 312 - 200);
}
