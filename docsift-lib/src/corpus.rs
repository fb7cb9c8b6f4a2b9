//! Bundled five-document demo corpus

use crate::document::Document;

/// The five sample business documents, nine sentences each.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            1,
            "AI Analytics Tool",
            "Introducing our revolutionary AI analytics tool that transforms how businesses understand their data. \
             This cutting-edge platform leverages advanced machine learning algorithms to provide real-time insights. \
             The tool processes massive datasets in seconds, identifying patterns that would take human analysts weeks to discover. \
             With its intuitive interface, even non-technical users can harness the power of artificial intelligence. \
             Our AI analytics solution integrates seamlessly with existing business intelligence systems. \
             The platform uses natural language processing to answer complex queries in plain English. \
             Companies using our tool have reported a 40% increase in decision-making speed. \
             The AI continuously learns from user interactions, improving its accuracy over time. \
             Security and privacy are built into every layer of the system, ensuring your data remains protected.",
        ),
        Document::new(
            2,
            "Finance Report Q4 2024",
            "Our quarterly finance report reveals strong performance across all business units. \
             Revenue increased by 15% compared to the previous quarter, driven primarily by enterprise sales. \
             Operating expenses remained stable despite significant investments in research and development. \
             The company's cash position strengthened, with reserves now exceeding $50 million. \
             Profit margins improved by 3 percentage points due to operational efficiency initiatives. \
             International markets contributed 35% of total revenue, showing robust global demand. \
             The finance team projects continued growth in the upcoming fiscal year. \
             Key investments in technology infrastructure are expected to yield returns in the next two quarters. \
             Shareholder confidence remains high, with stock prices reaching new all-time highs.",
        ),
        Document::new(
            3,
            "Cloud Infrastructure Strategy",
            "Our cloud infrastructure strategy focuses on multi-cloud deployment across AWS and Azure platforms. \
             We've migrated 80% of our workloads to the cloud, reducing on-premises infrastructure costs by 60%. \
             AWS provides our primary compute and storage services, handling over 2 million requests daily. \
             Azure hosts our machine learning workloads and data analytics pipelines. \
             The hybrid approach ensures high availability and disaster recovery capabilities. \
             Our DevOps team has implemented automated scaling to handle traffic spikes efficiently. \
             Security compliance is maintained through rigorous access controls and encryption standards. \
             The cloud infrastructure supports our global operations with data centers in multiple regions. \
             Cost optimization strategies have reduced our cloud spending by 25% while improving performance.",
        ),
        Document::new(
            4,
            "Marketing Campaign - SEO Optimization",
            "Our latest marketing campaign focuses on comprehensive SEO optimization to improve organic search rankings. \
             The strategy includes keyword research, content optimization, and technical SEO improvements. \
             We've identified 200 high-value keywords relevant to our target audience. \
             Content creators are producing SEO-friendly articles that rank for these keywords. \
             Technical improvements include faster page load times and mobile-responsive design. \
             The campaign has already increased organic traffic by 45% in the first month. \
             Link building efforts have improved our domain authority score significantly. \
             Social media integration amplifies our SEO content, driving additional engagement. \
             The marketing team tracks performance using advanced analytics tools and adjusts strategies weekly.",
        ),
        Document::new(
            5,
            "AI Tool and Machine Learning Integration",
            "Our new AI tool incorporates advanced machine learning models to automate complex business processes. \
             The machine learning algorithms analyze historical data to predict future trends with 92% accuracy. \
             This AI tool uses deep learning neural networks to process unstructured data like images and text. \
             Machine learning capabilities enable the system to adapt to changing business conditions automatically. \
             The AI tool integrates with our existing CRM, providing intelligent recommendations to sales teams. \
             Our data scientists have trained the machine learning models on over 10 million data points. \
             The tool's AI engine continuously improves through reinforcement learning techniques. \
             Machine learning predictions help optimize inventory management and reduce waste by 30%. \
             The AI tool's natural language interface allows users to interact with machine learning models conversationally.",
        ),
    ]
}
