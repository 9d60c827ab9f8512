use crate::completion::{CompletionClient, CompletionError};
use crate::search::{SearchClient, SearchError, SearchResult};

#[derive(Debug, thiserror::Error)]
pub enum AskError {
    #[error("{0}")]
    Search(#[from] SearchError),

    #[error("{0}")]
    Completion(#[from] CompletionError),
}

#[derive(Debug)]
pub struct AskOutcome {
    pub search_results: Vec<SearchResult>,
    pub ai_response: String,
    pub follow_up_questions: Vec<String>,
}

/// Runs the whole question pipeline: search, context, AI answer, follow-up
/// questions. The three upstream calls are strictly sequential and the
/// first failure aborts the request; there is no partial response.
pub struct Orchestrator {
    search: SearchClient,
    completion: CompletionClient,
}

impl Orchestrator {
    pub fn new(search: SearchClient, completion: CompletionClient) -> Orchestrator {
        Orchestrator { search, completion }
    }

    pub async fn ask(&self, query: &str) -> Result<AskOutcome, AskError> {
        let search_results = self.search.fetch(query).await?;
        let context = build_context(&search_results);

        let ai_response = self.completion.answer(query, &context).await?;
        let follow_up_questions = self.completion.follow_ups(query).await?;

        Ok(AskOutcome {
            search_results,
            ai_response,
            follow_up_questions,
        })
    }
}

fn build_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|result| format!("{}: {}", result.title, result.snippet))
        .collect::<Vec<String>>()
        .join("\n")
}
