//! Canned response tables.
//!
//! Every pool is an immutable static slice; selection happens in
//! [`crate::generator`].

use crate::category::Category;

const MATHEMATICS: &[&str] = &[
    "Mathematical analysis suggests:\n```\nLet x be the variable in question.\nApplying fundamental theorem of calculus:\n∫ f(x) dx from a to b = F(b) - F(a)\nWhere F is the antiderivative of f.\n```\nWould you like a step-by-step derivation?",
    "This mathematical problem requires consideration of:\n1. Initial conditions\n2. Boundary constraints\n3. Convergence properties\n4. Numerical stability\n\nI can provide a solution algorithm.",
    "For this mathematical concept:\n- Domain: ℝ (all real numbers)\n- Range: Depends on function properties\n- Critical points: Where f'(x) = 0\n- Inflection points: Where f''(x) = 0\n\nShall I elaborate on any specific aspect?",
    "Mathematical framework:\n```python\nimport numpy as np\n# Vector space operations\ndef vector_operations(v1, v2):\n    dot_product = np.dot(v1, v2)\n    cross_product = np.cross(v1, v2)\n    return dot_product, cross_product\n```\nThis demonstrates fundamental vector operations.",
];

const PROGRAMMING: &[&str] = &[
    "Programming analysis complete. Key considerations:\n\n- **Architecture**: Modular design recommended\n- **Complexity**: Consider time/space tradeoffs\n- **Testing**: Implement unit tests\n- **Documentation**: Maintain clear comments\n\n```python\n# Efficient algorithm implementation\ndef binary_search(arr, target):\n    left, right = 0, len(arr) - 1\n    while left <= right:\n        mid = left + (right - left) // 2\n        if arr[mid] == target:\n            return mid\n        elif arr[mid] < target:\n            left = mid + 1\n        else:\n            right = mid - 1\n    return -1\n```\nTime Complexity: O(log n)",
];

const SCIENCE: &[&str] = &[
    "**Scientific Analysis**:\n\nBased on established principles:\n1. **Hypothesis**: Testable prediction\n2. **Methodology**: Experimental design\n3. **Data**: Empirical observations\n4. **Analysis**: Statistical evaluation\n5. **Conclusion**: Evidence-based findings\n\n**Peer Review Considerations**: Validity, reliability, reproducibility.",
    "**Research Methodology**:\n\nFor this scientific inquiry:\n- **Control Group**: Essential for comparison\n- **Variables**: Independent vs. dependent\n- **Sample Size**: Power analysis required\n- **Ethics**: IRB approval if human subjects\n- **Publication**: Follow journal guidelines\n\nWould you like the experimental protocol?",
];

const LITERATURE: &[&str] = &[
    "**Literary Analysis Framework**:\n\n1. **Textual Analysis**: Close reading of passages\n2. **Historical Context**: Author's time period\n3. **Theoretical Lens**: Critical theory application\n4. **Character Development**: Arc and motivation\n5. **Thematic Elements**: Recurring patterns\n6. **Stylistic Devices**: Literary techniques employed\n\n**Thesis Development**: Construct argument with textual evidence.",
    "**Critical Interpretation**:\n\nKey aspects for analysis:\n- **Narrative Structure**: Linear vs. nonlinear\n- **Point of View**: First, second, or third person\n- **Symbolism**: Objects representing ideas\n- **Irony**: Verbal, situational, dramatic\n- **Allusion**: References to other works\n- **Diction**: Word choice and connotation\n\nProvide specific text for detailed analysis.",
];

const EXPLAIN: &[&str] = &[
    "**Conceptual Framework**:\n\nThis concept operates within a theoretical framework established by foundational research. The core principles involve:\n1. Fundamental axioms\n2. Derived theorems\n3. Practical applications\n4. Limitations and boundaries\n\n**Key Insight**: Understanding the historical development of this concept provides context for modern applications.",
    "**Detailed Explanation**:\n\nLet me break this down systematically:\n\n1. **Definition**: Precise terminology and scope\n2. **Context**: Historical and theoretical background\n3. **Mechanism**: How it operates or functions\n4. **Examples**: Real-world applications\n5. **Significance**: Why it matters in the field\n\nWould you like me to expand on any specific component?",
    "**Comparative Analysis**:\n\nThis concept differs from similar ideas in several key aspects:\n\n- **Scope**: Broader/narrower application\n- **Methodology**: Different approaches\n- **Outcomes**: Varied results or implications\n- **Theoretical Basis**: Different foundational assumptions\n\nUnderstanding these distinctions is crucial for proper application.",
];

const PROCEDURE: &[&str] = &[
    "**Procedural Guidelines**:\n\nStep-by-step methodology:\n\n1. **Preparation**: Gather required materials/resources\n2. **Initialization**: Set up environment/conditions\n3. **Execution**: Perform core procedure\n4. **Monitoring**: Track progress/metrics\n5. **Adjustment**: Make necessary modifications\n6. **Completion**: Finalize and document\n7. **Verification**: Validate results\n8. **Cleanup**: Restore original state\n\n**Safety Protocols**: Always follow established guidelines.",
];

const COMPARISON: &[&str] = &[
    "**Comparative Analysis**:\n\n| Aspect | Item A | Item B |\n|--------|--------|--------|\n| **Definition** | [Define A] | [Define B] |\n| **Purpose** | [Purpose A] | [Purpose B] |\n| **Method** | [Method A] | [Method B] |\n| **Advantages** | [Pros A] | [Pros B] |\n| **Limitations** | [Cons A] | [Cons B] |\n| **Use Cases** | [When to use A] | [When to use B] |\n\n**Key Distinction**: [Main difference]",
];

const EXAMPLE: &[&str] = &[
    "**Practical Example**:\n\n**Scenario**: Real-world application\n**Context**: Relevant circumstances\n**Implementation**: Step-by-step application\n**Result**: Expected outcome\n**Analysis**: Why this demonstrates the concept\n**Variations**: Alternative scenarios\n\n**Learning Objective**: Understand through applied context.",
    "**Case Study Example**:\n\n1. **Background**: Historical/contextual information\n2. **Problem Statement**: Specific issue addressed\n3. **Approach**: Methodology employed\n4. **Implementation**: How it was executed\n5. **Results**: Outcomes achieved\n6. **Analysis**: Lessons learned\n7. **Application**: How to apply elsewhere",
];

const HELP: &[&str] = &[
    "I can help with:\n1. Conceptual explanations\n2. Problem solving\n3. Code analysis\n4. Research assistance\n5. Study planning\n6. Data interpretation\n\nPlease specify your academic need.",
];

const GENERAL: &[&str] = &[
    "Based on my analysis, this topic requires careful consideration of fundamental principles. Would you like me to provide a structured explanation?",
    "This query involves multiple aspects. I recommend breaking it down into components for systematic analysis.",
    "My database contains relevant information on this subject. Shall I provide a comprehensive overview?",
    "This appears to be an advanced topic. Would you like a foundational explanation first, or shall I proceed directly to complex aspects?",
    "I can assist with this through several approaches:\n- Theoretical framework\n- Practical applications\n- Historical context\n- Current research trends\n\nWhich perspective would be most helpful?",
];

/// The template pool for a category. Never empty.
pub fn pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Mathematics => MATHEMATICS,
        Category::Programming => PROGRAMMING,
        Category::Science => SCIENCE,
        Category::Literature => LITERATURE,
        Category::Explain => EXPLAIN,
        Category::Procedure => PROCEDURE,
        Category::Comparison => COMPARISON,
        Category::Example => EXAMPLE,
        Category::Help => HELP,
        Category::General => GENERAL,
    }
}

pub const QUICK_EXPLAIN: &str = "**Concept Explanation Protocol Activated**\n\nI can explain any academic concept. Please specify:\n1. The concept name\n2. Your current understanding level\n3. Desired depth of explanation\n4. Any specific aspects to focus on\n\nExample: 'Explain quantum entanglement at undergraduate level'";

pub const QUICK_PROBLEM: &str = "**Problem Solving Mode**\n\nSubmit your problem for analysis. Include:\n1. Problem statement\n2. Known variables/constraints\n3. Desired outcome\n4. Any attempted solutions\n\nI will provide:\n- Step-by-step solution\n- Alternative approaches\n- Verification methods\n- Related problems for practice";

pub const QUICK_SUMMARY: &str = "**Summary Generation**\n\nProvide the material you'd like summarized. I can:\n1. Extract key points\n2. Identify main arguments\n3. Note important evidence\n4. Highlight connections\n5. Create study outlines\n\nMaximum length: 5000 characters";

pub const QUICK_QUIZ: &str = "**Quiz Generation System**\n\nBased on our conversation, here's a practice quiz:\n\n1. **Multiple Choice**: What is the time complexity of binary search?\n   A) O(n) B) O(log n) C) O(n²) D) O(1)\n\n2. **Short Answer**: Explain the concept of recursion.\n\n3. **Problem Solving**: Solve ∫ x² dx from 0 to 3\n\nWould you like more questions or specific topics?";

pub const DOCUMENTATION: &str = "**Athena Documentation**\n\n**Commands**:\n• /explain [topic] - Detailed explanation\n• /solve [problem] - Problem solution\n• /summary [text] - Text summarization\n• /quiz [topic] - Generate quiz\n• /focus - Toggle focus mode\n• /record - Start/stop session recording\n\n**Features**:\n• Adaptive learning algorithms\n• Academic database access\n• Code analysis and debugging\n• Research paper summaries\n• Study progress tracking";

pub const STARTUP_SPEECH: &str = "Athena Study Assistant initialized. All systems operational. Ready to assist with your academic pursuits.";
pub const STARTUP_MESSAGE: &str = "System initialized. How may I assist your studies today?";
pub const SESSION_STARTED: &str = "Study session initiated. Tracking progress and retention.";
pub const PREFERENCES_SAVED: &str = "System preferences updated successfully.";
pub const EXPORT_DONE: &str = "Study session data exported successfully.";
pub const FOCUS_ON: &str = "Focus mode activated. Minimizing distractions";
pub const FOCUS_OFF: &str = "Focus mode deactivated";
pub const RECORDING_ON: &str = "Study session recording started. All interactions will be logged.";
pub const RECORDING_OFF: &str = "Session recording stopped. Data saved to archive.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_sizes() {
        let expected = [
            (Category::Mathematics, 4),
            (Category::Programming, 1),
            (Category::Science, 2),
            (Category::Literature, 2),
            (Category::Explain, 3),
            (Category::Procedure, 1),
            (Category::Comparison, 1),
            (Category::Example, 2),
            (Category::Help, 1),
            (Category::General, 5),
        ];
        for (category, size) in expected {
            assert_eq!(pool(category).len(), size, "{category}");
        }
    }

    #[test]
    fn pools_have_no_duplicates() {
        for category in Category::ALL {
            let entries = pool(category);
            for (i, a) in entries.iter().enumerate() {
                assert!(!entries[i + 1..].contains(a), "{category} repeats a template");
            }
        }
    }
}
