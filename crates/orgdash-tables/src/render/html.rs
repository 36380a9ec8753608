//! Minimal HTML element tree for server-side rendering

use std::borrow::Cow;

/// A node of the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
	Element(Element),
	/// Text, escaped on output
	Text(String),
	/// Trusted markup, written verbatim
	Raw(String),
}

/// An HTML element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
	tag: &'static str,
	attrs: Vec<(&'static str, Cow<'static, str>)>,
	children: Vec<Node>,
}

impl Element {
	pub(crate) fn new(tag: &'static str) -> Self {
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	pub(crate) fn attr(mut self, name: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
		self.attrs.push((name, value.into()));
		self
	}

	/// Adds the attribute only when `value` is set
	pub(crate) fn opt_attr(
		self,
		name: &'static str,
		value: Option<impl Into<Cow<'static, str>>>,
	) -> Self {
		match value {
			Some(value) => self.attr(name, value),
			None => self,
		}
	}

	pub(crate) fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	pub(crate) fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	pub(crate) fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.write_to(&mut output);
		output
	}

	fn write_to(&self, output: &mut String) {
		output.push('<');
		output.push_str(self.tag);
		for (name, value) in &self.attrs {
			output.push(' ');
			output.push_str(name);
			output.push_str("=\"");
			output.push_str(&html_escape::encode_double_quoted_attribute(value));
			output.push('"');
		}
		output.push('>');
		for child in &self.children {
			match child {
				Node::Element(el) => el.write_to(output),
				Node::Text(text) => output.push_str(&html_escape::encode_text(text)),
				Node::Raw(html) => output.push_str(html),
			}
		}
		output.push_str("</");
		output.push_str(self.tag);
		output.push('>');
	}
}

impl From<Element> for Node {
	fn from(el: Element) -> Self {
		Node::Element(el)
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Text(text)
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::Text(text.to_string())
	}
}

/// Joins the non-empty classes with single spaces
pub(crate) fn classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
	parts
		.into_iter()
		.filter(|p| !p.is_empty())
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_escapes_text_and_attributes() {
		let html = Element::new("td")
			.attr("title", "say \"hi\"")
			.child("<script>alert(1)</script>")
			.render_to_string();
		assert_eq!(
			html,
			"<td title=\"say &quot;hi&quot;\">&lt;script&gt;alert(1)&lt;/script&gt;</td>"
		);
	}

	#[test]
	fn test_raw_is_verbatim() {
		let html = Element::new("td")
			.child(Node::Raw("<b>ok</b>".to_string()))
			.render_to_string();
		assert_eq!(html, "<td><b>ok</b></td>");
	}

	#[test]
	fn test_opt_attr_and_nesting() {
		let html = Element::new("tr")
			.opt_attr("class", None::<String>)
			.opt_attr("data-row-key", Some("7"))
			.children(vec![Element::new("td").child("a"), Element::new("td").child("b")])
			.render_to_string();
		assert_eq!(html, "<tr data-row-key=\"7\"><td>a</td><td>b</td></tr>");
	}

	#[test]
	fn test_classes_skips_empty() {
		assert_eq!(classes(["a", "", "b"]), "a b");
		assert_eq!(classes(Vec::<&str>::new()), "");
	}
}
