// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use tree_sitter::Node;

impl BaseExtractor {
    /// Find all descendants (and the node itself) whose kind is one of `node_types`,
    /// in document order
    ///
    /// Pre-order walk driven by a tree cursor, so deep trees do not grow the stack.
    pub fn find_nodes_by_types<'a>(&self, node: &Node<'a>, node_types: &[&str]) -> Vec<Node<'a>> {
        let mut nodes = Vec::new();
        let mut cursor = node.walk();

        loop {
            let current = cursor.node();
            if node_types.contains(&current.kind()) {
                nodes.push(current);
            }

            if cursor.goto_first_child() {
                continue;
            }

            // Climb until a sibling is available or we are back at the start node
            loop {
                if cursor.node() == *node {
                    return nodes;
                }
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return nodes;
                }
            }
        }
    }

    /// First named child of the given kind
    pub fn find_named_child_by_type<'a>(
        &self,
        node: &Node<'a>,
        child_type: &str,
    ) -> Option<Node<'a>> {
        let mut cursor = node.walk();
        let found = node
            .named_children(&mut cursor)
            .find(|child| child.kind() == child_type);
        found
    }

    /// Nearest ancestor whose kind is one of `parent_types`
    pub fn find_parent_of_types<'a>(
        &self,
        node: &Node<'a>,
        parent_types: &[&str],
    ) -> Option<Node<'a>> {
        ancestors(node).find(|parent| parent_types.contains(&parent.kind()))
    }

    /// Every ancestor of the given kind, nearest first
    pub fn find_parents_of_type<'a>(&self, node: &Node<'a>, parent_type: &str) -> Vec<Node<'a>> {
        ancestors(node)
            .filter(|parent| parent.kind() == parent_type)
            .collect()
    }
}

/// Iterate over the parents of `node`, nearest first, ending at the root
pub fn ancestors<'a>(node: &Node<'a>) -> impl Iterator<Item = Node<'a>> {
    std::iter::successors(node.parent(), |current| current.parent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse(content: &str) -> Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .unwrap();
        parser.parse(content, None).unwrap()
    }

    #[test]
    fn test_find_nodes_by_types_returns_document_order() {
        let content = "void a() {}\nstruct S {\n    void b() {}\n};\nvoid c() {}\n";
        let tree = parse(content);
        let base = BaseExtractor::new("cpp".to_string(), content.to_string());

        let names: Vec<String> = base
            .find_nodes_by_types(&tree.root_node(), &["function_definition"])
            .iter()
            .map(|node| base.get_node_text(&node.child_by_field_name("declarator").unwrap()))
            .collect();

        assert_eq!(names, vec!["a()", "b()", "c()"]);
    }

    #[test]
    fn test_find_nodes_by_types_stays_inside_subtree() {
        let content = "struct S {\n    void b() {}\n};\nvoid c() {}\n";
        let tree = parse(content);
        let base = BaseExtractor::new("cpp".to_string(), content.to_string());

        let root = tree.root_node();
        let structs = base.find_nodes_by_types(&root, &["struct_specifier"]);
        assert_eq!(structs.len(), 1);

        let inside = base.find_nodes_by_types(&structs[0], &["function_definition"]);
        assert_eq!(inside.len(), 1);
        assert_eq!(inside[0].start_position().row, 1);
    }

    #[test]
    fn test_ancestor_lookups() {
        let content = "namespace a {\nnamespace b {\nstruct S {\n    void f() {}\n};\n}\n}\n";
        let tree = parse(content);
        let base = BaseExtractor::new("cpp".to_string(), content.to_string());

        let function = base.find_nodes_by_types(&tree.root_node(), &["function_definition"])[0];

        let owner = base
            .find_parent_of_types(&function, &["class_specifier", "struct_specifier"])
            .unwrap();
        assert_eq!(owner.kind(), "struct_specifier");

        let namespaces = base.find_parents_of_type(&function, "namespace_definition");
        assert_eq!(namespaces.len(), 2);
        assert!(namespaces[0].start_position().row > namespaces[1].start_position().row);

        assert_eq!(ancestors(&function).last().unwrap().kind(), "translation_unit");
    }
}
