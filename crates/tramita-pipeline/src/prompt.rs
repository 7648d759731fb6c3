//! Prompts for the text-extraction and subject-classification calls

use crate::config::PipelineConfig;

/// Instructions for extracting legislative document text as markdown
pub const TEXT_EXTRACTION_PROMPT: &str = "\
Você é um assistente especializado em extrair texto de documentos legislativos brasileiros.

Extraia o texto completo deste documento PDF, preservando:
- A estrutura de artigos, parágrafos e incisos
- Numeração e formatação legal
- Texto de justificativas e ementas

Retorne apenas o texto extraído em formato markdown, sem comentários adicionais.
Organize o texto de forma clara e estruturada.
";

/// Build the subject-classification prompt for a document's text
pub fn classification_prompt(text: &str, config: &PipelineConfig) -> String {
    let mut prompt = String::new();
    prompt.push_str(
        "Você é um assistente que classifica proposições legislativas brasileiras por assunto.\n\n",
    );
    prompt.push_str(&format!(
        "Liste entre {} e {} assuntos que resumem o documento abaixo, cada um com no máximo {} palavras.\n",
        config.subject_floor, config.subject_cap, config.subject_word_cap,
    ));
    prompt.push_str(
        "Responda apenas com um array JSON de strings, sem comentários adicionais.\n\n",
    );
    prompt.push_str("Documento:\n---\n");
    prompt.push_str(text);
    prompt.push_str("\n---\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_prompt_embeds_limits_and_text() {
        let prompt = classification_prompt("Dispõe sobre o trânsito.", &PipelineConfig::default());
        assert!(prompt.contains("entre 3 e 8 assuntos"));
        assert!(prompt.contains("no máximo 7 palavras"));
        assert!(prompt.contains("Dispõe sobre o trânsito."));
    }
}
