//! Response agents, one per [`Category`].

pub mod knowledge;
pub mod sentiment;
pub mod task_planner;

pub use knowledge::KnowledgeAgent;
pub use sentiment::SentimentAgent;
pub use task_planner::TaskPlannerAgent;

use std::sync::Arc;

use crate::classifier::Category;
use crate::error::ModelError;
use crate::models::{SentimentClassifier, TextGenerator};

/// The three agents, routed by category.
pub struct Agents {
    pub task_planner: TaskPlannerAgent,
    pub knowledge: KnowledgeAgent,
    pub sentiment: SentimentAgent,
}

impl Agents {
    pub fn new(llm: Arc<dyn TextGenerator>, sentiment: Arc<dyn SentimentClassifier>) -> Self {
        Self {
            task_planner: TaskPlannerAgent::new(),
            knowledge: KnowledgeAgent::new(llm),
            sentiment: SentimentAgent::new(sentiment),
        }
    }

    /// Run the agent for `category` on an already-normalized query.
    pub async fn respond(&self, category: Category, query: &str) -> Result<String, ModelError> {
        match category {
            Category::TaskPlanner => Ok(self.task_planner.plan(query)),
            Category::Knowledge => self.knowledge.answer(query).await,
            Category::Sentiment => self.sentiment.analyze(query).await,
        }
    }
}
