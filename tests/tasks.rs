#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta};
    use tasktrack::db::activities::Activity;
    use tasktrack::db::error::StoreError;
    use tasktrack::db::store::Store;
    use tasktrack::db::tasks::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        store: Store,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::open(temp_dir.path().join("tasks.db")).unwrap();
            Task::ensure_table_created(&store).unwrap();
            Activity::ensure_table_created(&store).unwrap();
            TaskTestContext { _temp_dir: temp_dir, store }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_save_assigns_id(ctx: &mut TaskTestContext) {
        let mut task = Task::new("Write report");
        assert_eq!(task.id(), None);

        task.save(&ctx.store).unwrap();
        let id = task.id().unwrap();

        let loaded = Task::load_all(&ctx.store).unwrap();
        assert_eq!(loaded, vec![task.clone()]);
        assert_eq!(loaded[0].id(), Some(id));
        assert_eq!(loaded[0].name(), "Write report");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_rename_keeps_id(ctx: &mut TaskTestContext) {
        let mut task = Task::new("Draft");
        task.save(&ctx.store).unwrap();
        let id = task.id();

        task.set_name("Final");
        task.save(&ctx.store).unwrap();

        assert_eq!(task.id(), id);
        let loaded = Task::load_all(&ctx.store).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "Final");
        assert_eq!(loaded[0].id(), id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_load_all_in_creation_order(ctx: &mut TaskTestContext) {
        for name in ["one", "two", "three"] {
            Task::new(name).save(&ctx.store).unwrap();
        }

        let names: Vec<String> = Task::load_all(&ctx.store).unwrap().iter().map(|t| t.name().to_string()).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_table_creation_is_idempotent(ctx: &mut TaskTestContext) {
        let mut task = Task::new("Keep me");
        task.save(&ctx.store).unwrap();

        Task::ensure_table_created(&ctx.store).unwrap();
        Task::ensure_table_created(&ctx.store).unwrap();

        assert_eq!(Task::load_all(&ctx.store).unwrap(), vec![task]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_load_by_id(ctx: &mut TaskTestContext) {
        let mut task = Task::new("Find me");
        task.save(&ctx.store).unwrap();

        assert_eq!(Task::load_by_id(&ctx.store, task.id().unwrap()).unwrap(), Some(task));
        assert_eq!(Task::load_by_id(&ctx.store, 9999).unwrap(), None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete_removes_its_activities(ctx: &mut TaskTestContext) {
        let mut doomed = Task::new("Doomed");
        doomed.save(&ctx.store).unwrap();
        let mut kept = Task::new("Kept");
        kept.save(&ctx.store).unwrap();

        let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        for task in [&doomed, &kept] {
            let mut activity = Activity::new(task, start);
            activity.set_interval(start, start + TimeDelta::minutes(5));
            activity.save(&ctx.store).unwrap();
        }

        doomed.delete(&ctx.store).unwrap();

        assert_eq!(Task::load_all(&ctx.store).unwrap(), vec![kept.clone()]);
        let remaining = Activity::load_all(&ctx.store).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].task_id(), kept.id().unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_save_of_deleted_row_fails(ctx: &mut TaskTestContext) {
        let mut task = Task::new("Vanishing");
        task.save(&ctx.store).unwrap();
        let id = task.id().unwrap();
        ctx.store.execute_with("DELETE FROM task WHERE id = ?1", [id]).unwrap();

        task.set_name("Renamed");
        match task.save(&ctx.store) {
            Err(StoreError::MissingRow { table, id: missing }) => {
                assert_eq!(table, "task");
                assert_eq!(missing, id);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(task.id(), Some(id));
        assert!(Task::load_all(&ctx.store).unwrap().is_empty());
    }

    #[test]
    #[should_panic(expected = "task name must not be empty")]
    fn test_task_empty_name_panics() {
        let _ = Task::new("");
    }

    #[test]
    #[should_panic(expected = "never saved")]
    fn test_task_delete_unsaved_panics() {
        let store = Store::open_in_memory().unwrap();
        Task::ensure_table_created(&store).unwrap();
        let _ = Task::new("Ghost").delete(&store);
    }
}
