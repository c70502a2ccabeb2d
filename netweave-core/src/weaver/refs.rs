use netweave_bytecode::MethodRef;
use netweave_metadata::TypeRef;

/// Resolved references into the networking runtime that woven code calls.
/// The defaults name the stock runtime; a driver embedding the pass against
/// a renamed runtime overrides individual entries.
#[derive(Debug, Clone)]
pub struct RuntimeRefs {
  /// The optional-destination parameter type, compared by identity.
  pub connection_type: TypeRef,
  pub behaviour_type: TypeRef,
  pub writer_type: TypeRef,
  pub reader_type: TypeRef,
  /// Returns whether this endpoint may receive targeted calls.
  pub is_client_active: MethodRef,
  pub log_warning: MethodRef,
  /// Resolves the locally active default endpoint at delivery time, used
  /// when the call omitted its destination.
  pub ready_connection: MethodRef,
  pub type_from_token: MethodRef,
  /// Send-to-one-endpoint primitive:
  /// `(instance, destination-or-null, type token, wire name, writer, channel)`.
  pub send_targeted: MethodRef,
  pub writer_pool_get: MethodRef,
  pub writer_pool_recycle: MethodRef,
}

impl Default for RuntimeRefs {
  fn default() -> Self {
    Self {
      connection_type: TypeRef::new("NetworkConnection"),
      behaviour_type: TypeRef::new("NetworkBehaviour"),
      writer_type: TypeRef::new("NetworkWriter"),
      reader_type: TypeRef::new("NetworkReader"),
      is_client_active: MethodRef::new("NetworkClient", "is_active"),
      log_warning: MethodRef::new("Log", "warning"),
      ready_connection: MethodRef::new("NetworkClient", "ready_connection"),
      type_from_token: MethodRef::new("RuntimeType", "from_token"),
      send_targeted: MethodRef::new("NetworkBehaviour", "send_targeted"),
      writer_pool_get: MethodRef::new("NetworkWriterPool", "get"),
      writer_pool_recycle: MethodRef::new("NetworkWriterPool", "recycle"),
    }
  }
}
