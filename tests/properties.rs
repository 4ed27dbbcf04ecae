use proptest::prelude::*;
use std::collections::BTreeSet;
use tierlist_core::{Board, BoardIntent, Container, ContentRef, Direction, MoveIntent, TierId};

const TIER_NAMES: [&str; 7] = ["tier-s", "tier-a", "tier-b", "tier-c", "tier-d", "tier-f", "tier-gone"];

fn container_strategy() -> impl Strategy<Value = Option<Container>> {
    prop_oneof![
        1 => Just(None),
        3 => Just(Some(Container::Bank)),
        6 => (0..TIER_NAMES.len()).prop_map(|i| {
            Some(Container::Tier(TIER_NAMES[i].parse::<TierId>().unwrap()))
        }),
    ]
}

fn move_strategy() -> impl Strategy<Value = BoardIntent> {
    (container_strategy(), 0..12usize, container_strategy(), 0..12usize).prop_map(
        |(source, source_index, destination, destination_index)| {
            BoardIntent::MoveItem(MoveIntent::new(
                source.unwrap_or(Container::Bank),
                source_index,
                destination,
                destination_index,
            ))
        },
    )
}

fn intent_strategy() -> impl Strategy<Value = BoardIntent> {
    prop_oneof![
        8 => move_strategy(),
        1 => (0..8usize, any::<bool>()).prop_map(|(index, up)| BoardIntent::MoveTier {
            index,
            direction: if up { Direction::Up } else { Direction::Down },
        }),
        1 => (0..8usize, 0..8usize).prop_map(|(from, to)| BoardIntent::MoveTierOrder { from, to }),
        1 => Just(BoardIntent::AddTier),
    ]
}

fn board_with_items(count: usize) -> Board {
    let mut board = Board::default();
    for n in 0..count {
        board.add_item(ContentRef::new(format!("data:{}", n)));
    }
    board
}

fn all_item_ids(board: &Board) -> Vec<String> {
    board
        .bank()
        .iter()
        .chain(board.tiers().iter().flat_map(|t| t.items.iter()))
        .map(|item| item.id.to_string())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_moves_conserve_items(
        count in 0..10usize,
        intents in prop::collection::vec(intent_strategy(), 0..60),
    ) {
        let mut board = board_with_items(count);
        let before: BTreeSet<String> = all_item_ids(&board).into_iter().collect();

        for intent in intents {
            board.apply(intent);
        }

        let after = all_item_ids(&board);
        prop_assert_eq!(after.len(), count);
        prop_assert_eq!(after.into_iter().collect::<BTreeSet<_>>(), before);
    }

    #[test]
    fn prop_ids_stay_unique(
        count in 0..10usize,
        intents in prop::collection::vec(intent_strategy(), 0..60),
    ) {
        let mut board = board_with_items(count);

        for intent in intents {
            board.apply(intent);
            prop_assert!(board.check_invariants().is_ok());
        }
    }

    #[test]
    fn prop_rejected_moves_leave_board_identical(
        count in 0..6usize,
        intent in move_strategy(),
    ) {
        let mut board = board_with_items(count);
        let before = board.clone();

        if !board.apply(intent).is_applied() {
            prop_assert_eq!(board, before);
        }
    }
}
