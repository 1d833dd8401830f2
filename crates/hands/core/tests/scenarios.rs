use hands_core::{
    HandError, HandId, HandInput, HandLayout, HandSet, HandsConfig, InputOutcome, ItemDefinition,
    ItemHandle, MemoryInventory,
};

const X: ItemHandle = ItemHandle(10);
const BANNER: ItemHandle = ItemHandle(11);

fn active(hands: &HandSet) -> Option<&str> {
    hands.active_hand().map(HandId::as_str)
}

#[test]
fn add_cycle_remove_lifecycle() {
    let mut inventory = MemoryInventory::default();
    let mut hands = HandSet::new();

    hands.add_hand(&mut inventory, "left").unwrap();
    assert_eq!(active(&hands), Some("left"));

    hands.add_hand(&mut inventory, "right").unwrap();
    assert_eq!(active(&hands), Some("left"));

    hands.cycle_active().unwrap();
    assert_eq!(active(&hands), Some("right"));

    hands.remove_hand(&mut inventory, "right").unwrap();
    assert_eq!(active(&hands), Some("left"));

    hands.remove_hand(&mut inventory, "left").unwrap();
    assert_eq!(active(&hands), None);
    assert_eq!(hands.hands().count(), 0);
    assert_eq!(inventory.slot_count(), 0);
}

#[test]
fn take_from_empty_hand_is_refused_and_held_item_is_taken() {
    let mut inventory =
        MemoryInventory::with_items(&HandsConfig::default(), [ItemDefinition::new(X, 1)]);
    let hands = HandSet::from_layout(&HandLayout::humanoid(), &mut inventory).unwrap();
    assert_eq!(
        hands.place(&mut inventory, X, "left", false).unwrap(),
        Some(HandId::from("left"))
    );

    assert_eq!(hands.take(&mut inventory, "right").unwrap(), None);
    assert_eq!(hands.take(&mut inventory, "left").unwrap(), Some(X));
    assert_eq!(hands.item_in(&inventory, "left").unwrap(), None);
    assert!(!inventory.is_held(X));
}

#[test]
fn oversized_item_falls_back_to_nowhere() {
    let mut inventory = MemoryInventory::with_items(
        &HandsConfig::with_slot_size(2),
        [ItemDefinition::new(BANNER, 5)],
    );
    let hands = HandSet::from_layout(&HandLayout::humanoid(), &mut inventory).unwrap();

    assert!(!hands.can_place_any(&inventory, BANNER).unwrap());
    assert_eq!(hands.place(&mut inventory, BANNER, "left", true).unwrap(), None);
    assert_eq!(hands.snapshot(&inventory).held.len(), 0);
}

#[test]
fn occupied_active_hand_sends_pickup_to_next_hand() {
    let mut inventory = MemoryInventory::with_items(
        &HandsConfig::default(),
        [ItemDefinition::new(X, 1), ItemDefinition::new(BANNER, 1)],
    );
    let hands = HandSet::from_layout(&HandLayout::humanoid(), &mut inventory).unwrap();

    assert_eq!(
        hands.place_any(&mut inventory, X).unwrap(),
        Some(HandId::from("left"))
    );
    assert_eq!(
        hands.place_any(&mut inventory, BANNER).unwrap(),
        Some(HandId::from("right"))
    );

    let snapshot = hands.snapshot(&inventory);
    assert_eq!(snapshot.item_in("left"), Some(X));
    assert_eq!(snapshot.item_in("right"), Some(BANNER));
    assert_eq!(snapshot.active, Some(HandId::from("left")));
}

#[test]
fn losing_a_limb_mid_game_keeps_state_consistent() {
    let mut inventory =
        MemoryInventory::with_items(&HandsConfig::default(), [ItemDefinition::new(X, 1)]);
    let mut hands =
        HandSet::from_layout(&HandLayout::new(["left", "right", "tail"]), &mut inventory).unwrap();
    hands.set_active("right").unwrap();
    hands.place(&mut inventory, X, "right", false).unwrap();

    hands.remove_hand(&mut inventory, "right").unwrap();

    assert_eq!(active(&hands), Some("left"));
    assert!(!inventory.is_held(X));
    assert!(matches!(
        hands.take(&mut inventory, "right"),
        Err(HandError::UnknownHand { .. })
    ));
    assert_eq!(
        hands.handle_input(&mut inventory, HandInput::RemoteSetActive("right".into())),
        InputOutcome::Ignored
    );
}

#[test]
fn layout_with_duplicate_hand_aborts_initialization() {
    let mut inventory = MemoryInventory::default();
    let err = HandSet::from_layout(&HandLayout::new(["left", "left"]), &mut inventory).unwrap_err();
    assert_eq!(
        err,
        HandError::DuplicateHand {
            hand: HandId::from("left")
        }
    );
    assert_eq!(inventory.slot_count(), 0);
}
