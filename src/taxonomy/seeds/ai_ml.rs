//! AI and machine learning.

use super::{CategorySeed, seed};

pub(super) const SEEDS: &[CategorySeed] = &[
    CategorySeed {
        topics: &["llm", "large-language-model", "gpt", "claude", "openai", "anthropic", "langchain", "llamaindex"],
        keywords: &["llm", "large language model", "gpt", "claude", "openai"],
        stack_pool: &["LLMs", "Claude", "GPT", "LangChain", "Prompting"],
        taglines: Some(&[
            "Prompt engineering is engineering.",
            "I talk to machines for a living.",
            "Tokens in, wisdom out.",
        ]),
        ..seed("llm", "LLM Engineer", "\u{1F9E0}", "#8B5CF6")
    },
    CategorySeed {
        topics: &["rag", "retrieval-augmented-generation", "vector-search", "semantic-search"],
        keywords: &["rag", "retrieval augmented", "vector search", "semantic search"],
        stack_pool: &["RAG", "Embeddings", "Vector DB", "Chunking"],
        ..seed("rag", "RAG Engineer", "\u{1F4DA}", "#7C3AED")
    },
    CategorySeed {
        topics: &["embeddings", "vector-database", "vector-search", "pgvector", "qdrant", "pinecone"],
        keywords: &["embedding", "vector database", "similarity search"],
        stack_pool: &["Embeddings", "pgvector", "Qdrant", "Pinecone"],
        ..seed("embeddings", "Embeddings Dev", "\u{1F4CD}", "#6D28D9")
    },
    CategorySeed {
        topics: &["computer-vision", "opencv", "image-recognition", "object-detection", "yolo"],
        keywords: &["computer vision", "image recognition", "object detection"],
        stack_pool: &["OpenCV", "YOLO", "CNN", "Image Processing"],
        ..seed("computer-vision", "Computer Vision Dev", "\u{1F441}\u{FE0F}", "#059669")
    },
    CategorySeed {
        topics: &["nlp", "natural-language-processing", "text-analysis", "sentiment-analysis", "tokenizer"],
        keywords: &["nlp", "natural language", "text analysis", "sentiment"],
        stack_pool: &["NLP", "Transformers", "Tokenizers", "spaCy"],
        ..seed("nlp", "NLP Engineer", "\u{1F4AC}", "#0EA5E9")
    },
    CategorySeed {
        topics: &["ai-agent", "ai-agents", "autonomous-agents", "agent-framework", "mcp", "tool-use"],
        keywords: &["ai agent", "autonomous agent", "tool use", "mcp"],
        stack_pool: &["AI Agents", "MCP", "Tool Use", "Orchestration"],
        taglines: Some(&[
            "Building minds, one tool at a time.",
            "Agents are the new apps.",
            "I automate the thinkers.",
        ]),
        ..seed("ai-agents", "AI Agent Builder", "\u{1F916}", "#EC4899")
    },
    CategorySeed {
        topics: &["mlops", "ml-pipeline", "model-serving", "ml-deployment", "kubeflow"],
        keywords: &["mlops", "model serving", "ml pipeline"],
        stack_pool: &["MLOps", "Kubeflow", "MLflow", "Model Registry"],
        ..seed("mlops", "MLOps Engineer", "\u{2699}\u{FE0F}", "#10B981")
    },
    CategorySeed {
        topics: &["tensorflow", "keras", "tf", "tflite"],
        keywords: &["tensorflow", "keras"],
        stack_pool: &["TensorFlow", "Keras", "TFLite", "TensorBoard"],
        ..seed("tensorflow", "TensorFlow Dev", "\u{1F9E0}", "#FF6F00")
    },
    CategorySeed {
        topics: &["pytorch", "torch", "torchvision"],
        keywords: &["pytorch", "torch"],
        stack_pool: &["PyTorch", "torchvision", "Lightning"],
        ..seed("pytorch", "PyTorch Dev", "\u{1F525}", "#EE4C2C")
    },
    CategorySeed {
        topics: &["huggingface", "transformers", "hugging-face", "datasets"],
        keywords: &["hugging face", "transformers", "huggingface"],
        stack_pool: &["Hugging Face", "Transformers", "Datasets", "Spaces"],
        ..seed("huggingface", "Hugging Face Dev", "\u{1F917}", "#FFD21E")
    },
    CategorySeed {
        topics: &["ollama", "local-llm", "self-hosted-ai", "llama"],
        keywords: &["ollama", "local llm", "self-hosted ai"],
        stack_pool: &["Ollama", "Llama", "Mistral", "Local LLM"],
        taglines: Some(&[
            "AI belongs on your machine.",
            "No cloud required.",
            "Self-hosted intelligence.",
        ]),
        ..seed("ollama", "Ollama User", "\u{1F999}", "#FFFFFF")
    },
    CategorySeed {
        topics: &["stable-diffusion", "image-generation", "diffusion", "comfyui", "automatic1111"],
        keywords: &["stable diffusion", "image generation", "diffusion model"],
        stack_pool: &["Stable Diffusion", "ComfyUI", "LoRA", "SDXL"],
        ..seed("stable-diffusion", "Stable Diffusion Dev", "\u{1F3A8}", "#A855F7")
    },
];
