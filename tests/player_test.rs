//! Tests for player identity.

use tictactoe_console::Player;

#[test]
fn test_accessors() {
    let player = Player::new("You", 'X');
    assert_eq!(player.name(), "You");
    assert_eq!(player.marker(), 'X');
}

#[test]
fn test_describe_format() {
    let player = Player::new("Computer", 'O');
    assert_eq!(player.describe(), "Computer: O");
    assert_eq!(player.to_string(), "Computer: O");
}

#[test]
fn test_equality_is_by_identity() {
    let first = Player::new("You", 'X');
    let second = Player::new("You", 'X');
    assert_ne!(first, second, "same name and marker must not make players equal");
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_clone_keeps_identity() {
    let player = Player::new("You", 'X');
    let clone = player.clone();
    assert_eq!(player, clone);
    assert_eq!(player.id(), clone.id());
}
