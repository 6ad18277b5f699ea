use super::element::Element;

/// Drawing capability handed to `paint`. Collections never interpret it,
/// they only visit their elements in insertion order.
pub trait Surface {
    fn draw_element(&mut self, element: &Element);
}

impl Surface for Vec<Element> {
    fn draw_element(&mut self, element: &Element) {
        self.push(element.clone());
    }
}
