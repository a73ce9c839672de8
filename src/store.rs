// File: src/store.rs
use crate::model::Task;

/// In-memory, ordered task list. Indices are 0-based.
///
/// `remove`, `get` and `get_mut` panic on an out-of-range index, like slice
/// indexing does; callers check `len()` first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn remove(&mut self, index: usize) -> Task {
        self.tasks.remove(index)
    }

    pub fn get(&self, index: usize) -> &Task {
        &self.tasks[index]
    }

    pub fn get_mut(&mut self, index: usize) -> &mut Task {
        &mut self.tasks[index]
    }

    /// Tasks whose description contains `keyword` (case-sensitive), in list order.
    pub fn find(&self, keyword: &str) -> TaskList {
        self.tasks
            .iter()
            .filter(|t| t.description().contains(keyword))
            .cloned()
            .collect()
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self::from_tasks(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        TaskList::from_tasks(vec![
            Task::todo("read book"),
            Task::deadline("return book", "Sunday"),
            Task::event("book club", "Mon 7pm", "9pm", None),
            Task::todo("buy milk"),
        ])
    }

    #[test]
    fn test_add_appends() {
        let mut list = TaskList::new();
        assert!(list.is_empty());
        list.add(Task::todo("a"));
        list.add(Task::todo("b"));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).description(), "b");
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut list = sample();
        let removed = list.remove(1);
        assert_eq!(removed.description(), "return book");
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1).description(), "book club");
    }

    #[test]
    #[should_panic]
    fn test_remove_out_of_range_panics() {
        let mut list = sample();
        list.remove(10);
    }

    #[test]
    fn test_get_mut_changes_in_place() {
        let mut list = sample();
        list.get_mut(0).mark_done();
        assert!(list.get(0).is_done());
    }

    #[test]
    fn test_find_is_case_sensitive_and_ordered() {
        let list = sample();
        let found: Vec<_> = list.find("book").iter().map(|t| t.description().to_string()).collect();
        assert_eq!(found, vec!["read book", "return book", "book club"]);
        assert!(list.find("Book").is_empty());
    }

    #[test]
    fn test_find_ignores_dates() {
        let list = sample();
        assert!(list.find("Sunday").is_empty());
        assert!(list.find("7pm").is_empty());
    }

    #[test]
    fn test_find_returns_copies() {
        let list = sample();
        let mut found = list.find("milk");
        found.get_mut(0).mark_done();
        assert!(!list.get(3).is_done());
    }

    #[test]
    fn test_clear() {
        let mut list = sample();
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }
}
