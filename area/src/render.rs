use crate::Object;

/// Sink for drawable objects.
///
/// [`Area::draw`](crate::Area::draw) calls `draw` once per visible object in draw order;
/// groups arrive as their individual, already positioned members.
pub trait Renderer {
    fn draw(&mut self, object: &Object);
}

/// Records the id of every drawn object, in call order.
#[derive(Debug, Default)]
pub struct DrawLog {
    pub drawn: Vec<crate::ObjectId>,
}

impl Renderer for DrawLog {
    fn draw(&mut self, object: &Object) {
        self.drawn.push(object.id());
    }
}
