//! Task planner agent — fixed three-step breakdown.

/// Echoes the query with a generic plan. No model call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskPlannerAgent;

impl TaskPlannerAgent {
    pub fn new() -> Self {
        Self
    }

    pub fn plan(&self, query: &str) -> String {
        format!(
            "Task breakdown for: {query}\n\
             1. Analyze requirements\n\
             2. Plan approach\n\
             3. Execute steps"
        )
    }
}
