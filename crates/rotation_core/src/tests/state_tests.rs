use super::*;

fn settled(state: &mut RotationState) -> &mut RotationState {
    state.settle();
    state
}

#[test]
fn starts_idle_at_first_item() {
    let state = RotationState::new(4);
    assert_eq!(state.current_index(), Some(0));
    assert!(!state.is_transitioning());
    assert_eq!(state.item_count(), 4);
}

#[test]
fn forward_wraps_from_last_to_first() {
    let mut state = RotationState::new(4);
    state.jump_to(3).expect("jump");
    assert_eq!(settled(&mut state).advance(Direction::Forward), Some((3, 0)));
    assert_eq!(state.current_index(), Some(0));
}

#[test]
fn backward_wraps_from_first_to_last() {
    let mut state = RotationState::new(4);
    assert_eq!(state.advance(Direction::Backward), Some((0, 3)));
}

#[test]
fn index_moves_immediately_while_window_is_open() {
    let mut state = RotationState::new(3);
    state.advance(Direction::Forward).expect("advance");
    let snapshot = state.snapshot();
    assert_eq!(snapshot.current_index, Some(1));
    assert!(snapshot.transitioning);
}

#[test]
fn every_navigation_is_dropped_while_transitioning() {
    let mut state = RotationState::new(4);
    state.advance(Direction::Forward).expect("advance");
    let before = state.clone();

    assert_eq!(state.advance(Direction::Forward), None);
    assert_eq!(state.advance(Direction::Backward), None);
    assert_eq!(state.jump_to(3), None);
    assert_eq!(state, before);
}

#[test]
fn jump_to_current_or_out_of_range_is_ignored() {
    let mut state = RotationState::new(4);
    assert_eq!(state.jump_to(0), None);
    assert_eq!(state.jump_to(4), None);
    assert_eq!(state.jump_to(usize::MAX), None);
    assert_eq!(state, RotationState::new(4));
}

#[test]
fn settle_is_unconditional() {
    let mut state = RotationState::new(2);
    state.settle();
    assert!(!state.is_transitioning());
    state.advance(Direction::Forward).expect("advance");
    state.settle();
    state.settle();
    assert!(!state.is_transitioning());
    assert_eq!(state.current_index(), Some(1));
}

#[test]
fn empty_state_is_permanently_inactive() {
    let mut state = RotationState::new(0);
    assert!(!state.is_active());
    assert_eq!(state.advance(Direction::Forward), None);
    assert_eq!(state.advance(Direction::Backward), None);
    assert_eq!(state.jump_to(0), None);
    assert_eq!(state.snapshot(), RotationSnapshot::inactive());
}

#[test]
fn single_item_wraps_onto_itself() {
    let mut state = RotationState::new(1);
    assert_eq!(state.advance(Direction::Forward), Some((0, 0)));
    assert_eq!(settled(&mut state).advance(Direction::Backward), Some((0, 0)));
}

#[test]
fn n_forward_steps_visit_every_index_once_and_return() {
    for count in 1..=6 {
        for start in 0..count {
            let mut state = RotationState::new(count);
            if start != 0 {
                state.jump_to(start).expect("jump");
                state.settle();
            }
            let mut visited = Vec::new();
            for _ in 0..count {
                let (_, to) = state.advance(Direction::Forward).expect("advance");
                state.settle();
                visited.push(to);
            }
            assert_eq!(state.current_index(), Some(start));
            visited.sort_unstable();
            assert_eq!(visited, (0..count).collect::<Vec<_>>());
        }
    }
}

#[test]
fn backward_undoes_forward() {
    for count in 1..=5 {
        for start in 0..count {
            let mut state = RotationState::new(count);
            if start != 0 {
                state.jump_to(start).expect("jump");
                state.settle();
            }
            state.advance(Direction::Forward).expect("forward");
            state.settle();
            state.advance(Direction::Backward).expect("backward");
            assert_eq!(state.current_index(), Some(start));
        }
    }
}

#[test]
fn index_stays_in_bounds_under_mixed_navigation() {
    let count = 5;
    let mut state = RotationState::new(count);
    for step in 0..200usize {
        match step % 7 {
            0 | 3 => {
                state.advance(Direction::Backward);
            }
            1 | 4 | 5 => {
                state.advance(Direction::Forward);
            }
            _ => {
                state.jump_to((step * 3) % (count + 2));
            }
        }
        if step % 2 == 0 {
            state.settle();
        }
        let index = state.current_index().expect("active");
        assert!(index < count);
    }
}
