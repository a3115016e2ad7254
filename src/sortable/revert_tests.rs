use egui::Id;

use super::{
    ContainerConfig, ContainerId, ControlId, FormArray, FormControl, Outcome, SortableBoard,
    SortableEvent, SortableItem, SortableOptions,
};

fn element(value: i32) -> Id {
    Id::new(("item", value))
}

fn item(board: &SortableBoard<i32>, container: ContainerId, index: usize) -> SortableItem<i32> {
    let value = board.items(container).expect("registered container")[index];
    SortableItem::new(element(value), container, index, value)
}

fn board_with(
    options: SortableOptions,
    a: Vec<i32>,
    b: Vec<i32>,
) -> (SortableBoard<i32>, ContainerId, ContainerId) {
    let _ignored = env_logger::builder().is_test(true).try_init();
    let mut board = SortableBoard::new(options);
    let a = board.add_container(ContainerConfig::default(), a);
    let b = board.add_container(ContainerConfig::default(), b);
    (board, a, b)
}

#[test]
fn escape_after_entering_empty_list_reverts_both() {
    let (mut board, a, b) = board_with(SortableOptions::default(), vec![1, 2, 3], vec![]);
    let dragged = item(&board, a, 1);
    assert!(board.drag_start(&dragged).expect("valid").is_applied());
    assert!(board.container_drag_enter(b).expect("b").is_applied());
    assert_eq!(board.items(a), Ok(vec![1, 3]));
    board.take_events();

    assert_eq!(board.drag_end(&dragged), Outcome::Applied);
    assert_eq!(board.items(a), Ok(vec![1, 2, 3]));
    assert_eq!(board.items(b), Ok(vec![]));
    assert!(board.container(a).expect("a").drop_enabled());
    assert!(board.container(b).expect("b").drop_enabled());
    assert_eq!(
        board.take_events(),
        vec![
            SortableEvent::DragEnd {
                element: element(2),
                data: Some(2)
            },
            SortableEvent::Refresh { container: a },
            SortableEvent::Refresh { container: b },
        ]
    );
}

#[test]
fn revert_restores_original_order_after_many_moves() {
    let (mut board, a, b) = board_with(SortableOptions::default(), vec![1, 2, 3], vec![7, 8, 9]);
    let dragged = item(&board, a, 2);
    assert!(board.drag_start(&dragged).expect("valid").is_applied());

    assert!(board.drag_enter(&item(&board, b, 0)).expect("b0").is_applied());
    assert_eq!(board.items(b), Ok(vec![3, 7, 8, 9]));
    assert!(board.drag_enter(&item(&board, b, 2)).expect("b2").is_applied());
    assert_eq!(board.items(b), Ok(vec![7, 8, 3, 9]));
    assert!(board.drag_enter(&item(&board, a, 0)).expect("a0").is_applied());
    assert_eq!(board.items(a), Ok(vec![3, 1, 2]));
    assert_eq!(board.items(b), Ok(vec![7, 8, 9]));

    assert!(board.drag_end(&dragged).is_applied());
    assert_eq!(board.items(a), Ok(vec![1, 2, 3]));
    assert_eq!(board.items(b), Ok(vec![7, 8, 9]));
}

#[test]
fn successful_drop_is_never_reverted() {
    let (mut board, a, b) = board_with(SortableOptions::default(), vec![1, 2], vec![5]);
    let dragged = item(&board, a, 0);
    assert!(board.drag_start(&dragged).expect("valid").is_applied());
    assert!(board.drag_enter(&item(&board, b, 0)).expect("b0").is_applied());

    let landed = item(&board, b, 0);
    assert!(board.drop_on(&landed).expect("valid").is_applied());
    assert!(board.drag_end(&dragged).is_applied());

    assert_eq!(board.items(a), Ok(vec![2]));
    assert_eq!(board.items(b), Ok(vec![1, 5]));
    assert!(matches!(
        board.take_events().last(),
        Some(SortableEvent::DragEnd { .. })
    ));
}

#[test]
fn hover_only_gesture_leaves_lists_untouched() {
    let (mut board, a, _b) = board_with(SortableOptions::default(), vec![1, 2, 3], vec![]);
    let dragged = item(&board, a, 0);
    assert!(board.drag_start(&dragged).expect("valid").is_applied());
    assert!(board.drag_over(&item(&board, a, 2)).expect("a2").is_applied());
    assert!(board.drag_end(&dragged).is_applied());
    assert_eq!(board.items(a), Ok(vec![1, 2, 3]));
}

#[test]
fn reorder_inside_origin_is_not_staged_for_revert() {
    let (mut board, a, _b) = board_with(SortableOptions::default(), vec![1, 2, 3], vec![]);
    let dragged = item(&board, a, 0);
    assert!(board.drag_start(&dragged).expect("valid").is_applied());
    assert!(board.drag_enter(&item(&board, a, 2)).expect("a2").is_applied());

    assert!(board.drag_end(&dragged).is_applied());
    assert_eq!(board.items(a), Ok(vec![2, 3, 1]));
}

#[test]
fn revert_can_be_disabled() {
    let options = SortableOptions {
        revert_on_abort: false,
        ..Default::default()
    };
    let (mut board, a, b) = board_with(options, vec![1, 2], vec![]);
    let dragged = item(&board, a, 0);
    assert!(board.drag_start(&dragged).expect("valid").is_applied());
    assert!(board.container_drag_enter(b).expect("b").is_applied());
    assert!(board.drag_end(&dragged).is_applied());

    assert_eq!(board.items(a), Ok(vec![2]));
    assert_eq!(board.items(b), Ok(vec![1]));

    // The ledger was emptied all the same: the next gesture starts clean.
    assert!(board.remove_container(b).is_ok());
}

#[test]
fn new_drag_aborts_a_gesture_that_never_ended() {
    let (mut board, a, b) = board_with(SortableOptions::default(), vec![1, 2], vec![]);
    let first = item(&board, a, 0);
    assert!(board.drag_start(&first).expect("valid").is_applied());
    assert!(board.container_drag_enter(b).expect("b").is_applied());
    board.take_events();

    // Positions as rendered before the stale move is undone.
    let second = SortableItem::new(element(2), a, 1, 2);
    assert!(board.drag_start(&second).expect("valid").is_applied());
    assert_eq!(board.items(a), Ok(vec![1, 2]));
    assert_eq!(board.items(b), Ok(vec![]));

    let events = board.take_events();
    assert_eq!(
        events.first(),
        Some(&SortableEvent::DragEnd {
            element: element(1),
            data: Some(1)
        })
    );
    assert_eq!(
        events.last(),
        Some(&SortableEvent::DragStart {
            element: element(2),
            data: 2
        })
    );
    assert_eq!(board.drag_data(), Some(&2));
    assert_eq!(
        board.active_drag().map(|active| (active.container, active.index)),
        Some((a, 1))
    );
}

#[test]
fn form_arrays_revert_by_control_identity() {
    let _ignored = env_logger::builder().is_test(true).try_init();
    let controls = |ids: &[u64]| {
        FormArray::new(
            ids.iter()
                .map(|&id| FormControl::new(ControlId(id), format!("field {id}")))
                .collect(),
        )
    };

    let mut board = SortableBoard::<FormControl<String>, ControlId>::default();
    let left = board.add_container(ContainerConfig::default(), controls(&[1, 2]));
    let right = board.add_container(ContainerConfig::default(), controls(&[3]));

    let dragged = SortableItem::new(Id::new("field-1"), left, 0, ControlId(1));
    assert!(board.drag_start(&dragged).expect("valid").is_applied());
    let target = SortableItem::new(Id::new("field-3"), right, 0, ControlId(3));
    assert!(board.drag_enter(&target).expect("valid").is_applied());

    let ids = |board: &SortableBoard<FormControl<String>, ControlId>, id| {
        board
            .items(id)
            .expect("registered")
            .iter()
            .map(FormControl::id)
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&board, left), vec![ControlId(2)]);
    assert_eq!(ids(&board, right), vec![ControlId(1), ControlId(3)]);

    assert!(board.drag_end(&dragged).is_applied());
    assert_eq!(ids(&board, left), vec![ControlId(1), ControlId(2)]);
    assert_eq!(ids(&board, right), vec![ControlId(3)]);
    assert_eq!(
        board.items(left).expect("left")[0].value,
        "field 1".to_owned()
    );
}
