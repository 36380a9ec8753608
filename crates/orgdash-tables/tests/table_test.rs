
use fixtures::*;
use orgdash_tables::{
	BadgeColor, CellContent, Click, ColumnDescriptor, DataTable, DeleteTarget, DispatchOutcome,
	Row, RowAction, RowKey, Sign, TableEvent, TableOptions, TableSettings, TableView,
	financial_columns, row::ResolveWith, users_columns,
};
use rstest::*;

fn logged_options(log: &CallLog) -> TableOptions {
	let (edit, delete, click, action) = (log.clone(), log.clone(), log.clone(), log.clone());
	TableOptions::new()
		.on_edit(move |row| edit.push(format!("edit:{}", row.get("name").unwrap())))
		.on_delete(move |target| {
			delete.push(match target {
				DeleteTarget::Id(id) => format!("delete-id:{}", id),
				DeleteTarget::Row(row) => format!("delete-row:{}", row.get("name").unwrap()),
			})
		})
		.on_row_click(move |row| click.push(format!("row:{}", row.get("name").unwrap())))
		.action(RowAction::new("Reset", move |row| {
			action.push(format!("reset:{}", row.get("name").unwrap()))
		}))
}

#[rstest]
fn test_populated_view(sample_users: Vec<Row>) {
	let columns = users_columns(None);
	let table = DataTable::new(&sample_users, &columns);

	let state = table.state();
	assert!(!state.loading);
	assert!(!state.is_empty);
	assert_eq!(state.row_count, 3);

	let TableView::Populated { header, rows } = table.view() else {
		panic!("expected populated view");
	};
	assert_eq!(header.len(), columns.len());
	assert_eq!(rows.len(), 3);
	assert!(rows.iter().all(|r| r.cells.len() == columns.len()));
	assert!(rows.iter().all(|r| r.actions.is_empty()));
}

#[rstest]
fn test_loading_takes_precedence(sample_users: Vec<Row>) {
	let columns = users_columns(None);
	let table = DataTable::new(&sample_users, &columns).options(TableOptions::new().loading(true));

	assert!(table.state().loading);
	assert!(!table.state().is_empty);
	assert_eq!(
		table.view(),
		TableView::Loading {
			message: "Memuat...".to_string()
		}
	);

	let html = table.render_html();
	assert!(html.contains("Memuat..."));
	assert!(!html.contains("<tr"));
	assert!(!html.contains("Alice"));
}

#[rstest]
fn test_empty_state() {
	let columns = users_columns(None);
	let table = DataTable::new(&[], &columns);

	assert!(table.state().is_empty);
	assert_eq!(
		table.view(),
		TableView::Empty {
			message: "Tidak ada data".to_string()
		}
	);

	let html = table.render_html();
	assert!(html.contains("Tidak ada data"));
	assert!(!html.contains("<th"));
	assert!(!html.contains("<tr"));
}

#[rstest]
fn test_custom_empty_message() {
	let columns = financial_columns(None);
	let table = DataTable::new(&[], &columns)
		.options(TableOptions::new().empty_message("Belum ada transaksi"));
	assert!(table.render_html().contains("Belum ada transaksi"));
}

#[rstest]
fn test_header_with_row_numbers_and_actions(sample_users: Vec<Row>, call_log: CallLog) {
	let columns = users_columns(None);
	let table = DataTable::new(&sample_users, &columns)
		.options(logged_options(&call_log).show_row_numbers(true));

	let TableView::Populated { header, rows } = table.view() else {
		panic!("expected populated view");
	};
	assert_eq!(header.len(), columns.len() + 2);
	assert_eq!(header[0].title, "No");
	assert_eq!(header.last().unwrap().title, "Aksi");
	assert_eq!(
		rows.iter().map(|r| r.number).collect::<Vec<_>>(),
		vec![Some(1), Some(2), Some(3)]
	);

	let clicks: Vec<_> = rows[0].actions.iter().map(|a| a.click).collect();
	assert_eq!(clicks, vec![Click::Edit, Click::Delete, Click::Action(0)]);
	assert_eq!(rows[0].actions[2].title, "Reset");
}

#[rstest]
fn test_actions_column_needs_a_callback(sample_users: Vec<Row>, call_log: CallLog) {
	let columns = users_columns(None);

	let bare = DataTable::new(&sample_users, &columns).options(TableOptions::new().actions(true));
	assert!(!bare.has_actions());

	let disabled =
		DataTable::new(&sample_users, &columns).options(logged_options(&call_log).actions(false));
	assert!(!disabled.has_actions());
	assert!(!disabled.render_html().contains("Aksi"));
}

#[rstest]
fn test_row_keys(sample_users: Vec<Row>) {
	let columns = users_columns(None);
	let table = DataTable::new(&sample_users, &columns);
	let TableView::Populated { rows, .. } = table.view() else {
		panic!("expected populated view");
	};
	assert_eq!(rows[0].key, RowKey::Id("1".to_string()));
	assert_eq!(rows[2].key, RowKey::Index(2));

	let by_name = DataTable::new(&sample_users, &columns).options(TableOptions::new().row_key(
		ResolveWith(|row: &Row, index: usize| match row.get("name") {
			Some(name) => RowKey::Id(name.as_str().unwrap_or_default().to_lowercase()),
			None => RowKey::Index(index),
		}),
	));
	let html = by_name.render_html();
	assert!(html.contains("data-row-key=\"charlie\""));
}

#[rstest]
fn test_cell_formatting_in_rows(transactions: Vec<Row>) {
	let columns = financial_columns(None);
	let table = DataTable::new(&transactions, &columns);
	let TableView::Populated { rows, .. } = table.view() else {
		panic!("expected populated view");
	};

	// date, description, category, type, amount, status
	assert_eq!(rows[0].cells[0].content.plain_text(), "15 Januari 2024");
	assert_eq!(
		rows[1].cells[4].content,
		CellContent::Amount {
			text: "-Rp 1.500.000".to_string(),
			sign: Some(Sign::Negative),
		}
	);
	assert_eq!(rows[1].cells[4].content.class(), Some("text-red-600"));
	assert!(rows[2].cells[0].content.is_placeholder());
	assert!(rows[2].cells[2].content.is_placeholder());
	assert_eq!(rows[2].cells[4].content.plain_text(), "Rp 0");
	assert_eq!(
		rows[2].cells[3].content,
		CellContent::Badge {
			label: "adjustment".to_string(),
			class: BadgeColor::Gray.class().to_string(),
		}
	);
	assert_eq!(rows[0].cells[3].content.plain_text(), "Pemasukan");
}

#[rstest]
fn test_badge_scenario() {
	let columns = vec![
		ColumnDescriptor::badge("status", "Status")
			.badge_color("active", "green")
			.badge_color("inactive", "red"),
	];
	let rows = vec![
		Row::new().with("status", "active"),
		Row::new().with("status", "unknown"),
	];
	let table = DataTable::new(&rows, &columns);

	assert_eq!(
		table.format_cell(&columns[0], &rows[0]),
		CellContent::Badge {
			label: "active".to_string(),
			class: "green".to_string(),
		}
	);
	assert_eq!(
		table.format_cell(&columns[0], &rows[1]),
		CellContent::Badge {
			label: "unknown".to_string(),
			class: BadgeColor::Gray.class().to_string(),
		}
	);
}

#[rstest]
fn test_delete_fires_once_without_row_click(sample_users: Vec<Row>, call_log: CallLog) {
	let columns = users_columns(None);
	let mut table = DataTable::new(&sample_users, &columns).options(logged_options(&call_log));

	assert_eq!(table.dispatch(TableEvent::delete(0)), DispatchOutcome::Handled);
	assert_eq!(call_log.entries(), vec!["delete-id:1"]);

	assert_eq!(table.dispatch(TableEvent::delete(2)), DispatchOutcome::Handled);
	assert_eq!(
		call_log.entries(),
		vec!["delete-id:1", "delete-row:\"Charlie\""]
	);
}

#[rstest]
fn test_action_clicks_are_contained(sample_users: Vec<Row>, call_log: CallLog) {
	let columns = users_columns(None);
	let mut table = DataTable::new(&sample_users, &columns).options(logged_options(&call_log));

	table.dispatch(TableEvent::edit(1));
	table.dispatch(TableEvent::action(1, 0));
	table.dispatch(TableEvent::row_click(1));

	assert_eq!(
		call_log.entries(),
		vec!["edit:\"Bob\"", "reset:\"Bob\"", "row:\"Bob\""]
	);
	assert_eq!(table.state().active_row, Some(1));
}

#[rstest]
fn test_pressed_row_released_by_pointer(sample_users: Vec<Row>, call_log: CallLog) {
	let columns = users_columns(None);
	let mut table = DataTable::new(&sample_users, &columns).options(logged_options(&call_log));

	table.dispatch(TableEvent::row_click(0));
	assert_eq!(table.state().active_row, Some(0));

	table.pointer_enter(0);
	assert_eq!(table.state().active_row, Some(0));

	table.pointer_enter(1);
	assert_eq!(table.state().active_row, Some(1));
	assert_eq!(table.interaction().pressed, None);

	table.dispatch(TableEvent::row_click(1));
	table.pointer_leave();
	assert_eq!(table.state().active_row, None);
}

#[rstest]
#[case(TableEvent::delete(9))]
#[case(TableEvent::action(0, 3))]
#[case(TableEvent::row_click(3))]
fn test_out_of_range_events_ignored(
	sample_users: Vec<Row>,
	call_log: CallLog,
	#[case] event: TableEvent,
) {
	let columns = users_columns(None);
	let mut table = DataTable::new(&sample_users, &columns).options(logged_options(&call_log));

	assert_eq!(table.dispatch(event), DispatchOutcome::Ignored);
	assert!(call_log.entries().is_empty());
}

#[rstest]
fn test_events_ignored_while_loading(sample_users: Vec<Row>, call_log: CallLog) {
	let columns = users_columns(None);
	let mut table =
		DataTable::new(&sample_users, &columns).options(logged_options(&call_log).loading(true));

	assert_eq!(table.dispatch(TableEvent::row_click(0)), DispatchOutcome::Ignored);
	assert_eq!(table.dispatch(TableEvent::delete(0)), DispatchOutcome::Ignored);
	assert!(call_log.entries().is_empty());
}

#[rstest]
fn test_action_without_actions_column_ignored(sample_users: Vec<Row>, call_log: CallLog) {
	let columns = users_columns(None);
	let mut table =
		DataTable::new(&sample_users, &columns).options(logged_options(&call_log).actions(false));

	assert_eq!(table.dispatch(TableEvent::edit(0)), DispatchOutcome::Ignored);
	assert_eq!(table.dispatch(TableEvent::row_click(0)), DispatchOutcome::Handled);
	assert_eq!(call_log.entries(), vec!["row:\"Alice\""]);
}

#[rstest]
fn test_html_attributes_route_back(sample_users: Vec<Row>, call_log: CallLog) {
	let columns = users_columns(None);
	let mut table = DataTable::new(&sample_users, &columns).options(logged_options(&call_log));
	let html = table.render_html();

	assert!(html.contains("data-row-key=\"2\""));
	assert!(html.contains("data-row-index=\"1\""));
	assert!(html.contains("data-action=\"action-0\""));
	assert!(html.contains("cursor-pointer"));

	let event = TableEvent::from_attrs("1", "action-0").unwrap();
	assert!(table.dispatch(event).is_handled());
	assert_eq!(call_log.entries(), vec!["reset:\"Bob\""]);
}

#[rstest]
fn test_html_escapes_cell_text() {
	let columns = vec![ColumnDescriptor::text("name", "Nama <b>")];
	let rows = vec![Row::new().with("name", "<script>alert('x')</script>")];
	let html = DataTable::new(&rows, &columns).render_html();

	assert!(!html.contains("<script>"));
	assert!(html.contains("&lt;script&gt;"));
	assert!(html.contains("Nama &lt;b&gt;"));
}

#[rstest]
fn test_markup_renderer_is_not_escaped() {
	let columns = vec![
		ColumnDescriptor::text("email", "Email").render(|value, _| {
			let email = value.as_str().unwrap_or_default();
			CellContent::markup(format!("<a href=\"mailto:{0}\">{0}</a>", email), email)
		}),
	];
	let rows = vec![Row::new().with("email", "a@b.id")];
	let html = DataTable::new(&rows, &columns).render_html();
	assert!(html.contains("<a href=\"mailto:a@b.id\">a@b.id</a>"));
}

#[rstest]
fn test_striping_in_html(sample_users: Vec<Row>) {
	let columns = users_columns(None);
	let html = DataTable::new(&sample_users, &columns).render_html();
	assert_eq!(html.matches("bg-gray-50 hover:bg-gray-100").count(), 1);

	let plain = DataTable::new(&sample_users, &columns)
		.options(TableOptions::new().striped(false).hoverable(false))
		.render_html();
	assert!(!plain.contains("hover:bg-gray-100"));
}

#[rstest]
fn test_settings_flow_into_cells(transactions: Vec<Row>) {
	let settings = TableSettings::from_toml_str(
		r#"
		[currency]
		symbol = "IDR"

		[date]
		style = "short"
		"#,
	)
	.unwrap();
	let columns = financial_columns(None);
	let table =
		DataTable::new(&transactions, &columns).options(TableOptions::new().settings(settings));

	let TableView::Populated { rows, .. } = table.view() else {
		panic!("expected populated view");
	};
	assert_eq!(rows[0].cells[0].content.plain_text(), "15/01/2024");
	assert_eq!(rows[0].cells[4].content.plain_text(), "+IDR 1.500.000");
}
