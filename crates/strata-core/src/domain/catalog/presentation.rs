//! Presentation-layer bodies.
//!
//! Events and UI states are emitted as Dart `sealed` hierarchies so the
//! view-model and screen can `switch` over them exhaustively.

pub(super) const EVENT: &str = r#"import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/domain/entities/{{FEATURE_SNAKE}}_model.dart';

sealed class {{FEATURE_PASCAL}}Event {}

final class Load{{FEATURE_PASCAL}}Data extends {{FEATURE_PASCAL}}Event {}

final class Refresh{{FEATURE_PASCAL}}Data extends {{FEATURE_PASCAL}}Event {}

//==========================
// NOTE: Add navigation events here if needed, otherwise remove.
//==========================
// final class NavigateTo<Screen> extends {{FEATURE_PASCAL}}Event {
//   // Optional: carry values or a {{FEATURE_PASCAL}}Model if needed.
//   final String title;
//
//   NavigateTo<Screen>(this.title);
// }
"#;

pub(super) const UI_STATE: &str = r#"import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/domain/entities/{{FEATURE_SNAKE}}_model.dart';

sealed class {{FEATURE_PASCAL}}UiState {}

final class {{FEATURE_PASCAL}}Loading extends {{FEATURE_PASCAL}}UiState {}

final class {{FEATURE_PASCAL}}Success extends {{FEATURE_PASCAL}}UiState {
  final {{FEATURE_PASCAL}}Model {{FEATURE_SNAKE}}Model;

  {{FEATURE_PASCAL}}Success(this.{{FEATURE_SNAKE}}Model);
}

final class {{FEATURE_PASCAL}}Error extends {{FEATURE_PASCAL}}UiState {
  final String message;

  {{FEATURE_PASCAL}}Error(this.message);
}
"#;

pub(super) const VIEW_MODEL: &str = r#"import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/data/data_store/{{FEATURE_SNAKE}}_data_store.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/domain/usecases/{{FEATURE_SNAKE}}_usecase.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/presentation/event/{{FEATURE_SNAKE}}_event.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/presentation/state/{{FEATURE_SNAKE}}_ui_state.dart';
import 'package:flutter/cupertino.dart';
import 'package:rxdart/rxdart.dart';

class {{FEATURE_PASCAL}}ViewModel extends ChangeNotifier {
  final {{FEATURE_PASCAL}}UseCase _useCase;
  final {{FEATURE_PASCAL}}DataStore _dataStore;

  // UI State management
  final _stateSubject = BehaviorSubject<{{FEATURE_PASCAL}}UiState>.seeded({{FEATURE_PASCAL}}Loading());
  Stream<{{FEATURE_PASCAL}}UiState> get stateStream => _stateSubject.stream;

  // Navigation management
  final _navigationSubject = BehaviorSubject<Function(BuildContext)>();
  Stream<Function(BuildContext)> get navigationStream => _navigationSubject.stream;

  {{FEATURE_PASCAL}}ViewModel(this._useCase, this._dataStore);

  void handleEvent({{FEATURE_PASCAL}}Event event) {
    switch (event) {
      case Load{{FEATURE_PASCAL}}Data():
        _initData();
      case Refresh{{FEATURE_PASCAL}}Data():
        _initData();
    }
  }

  void _initData() {
    _stateSubject.add({{FEATURE_PASCAL}}Loading());
    _useCase.execute().then((result) {
      _stateSubject.add({{FEATURE_PASCAL}}Success(result));
    }).catchError((error) {
      _stateSubject.add({{FEATURE_PASCAL}}Error("Failed to load {{FEATURE_SNAKE}}"));
    });
  }

  void _navigateTo(Function(BuildContext) builder) {
    _navigationSubject.add(builder);
  }

  @override
  void dispose() {
    _stateSubject.close();
    _navigationSubject.close();
    super.dispose();
  }
}
"#;

pub(super) const SCREEN: &str = r#"import 'package:{{APP_NAME}}/core/widgets/error_widget.dart';
import 'package:{{APP_NAME}}/core/widgets/loading_widget.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/presentation/event/{{FEATURE_SNAKE}}_event.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/presentation/state/{{FEATURE_SNAKE}}_ui_state.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/presentation/viewmodel/{{FEATURE_SNAKE}}_view_model.dart';
import 'package:{{APP_NAME}}/features/{{FEATURE_SNAKE}}/presentation/widgets/{{FEATURE_SNAKE}}_screen_content.dart';
import 'package:flutter/material.dart';
import 'package:get_it/get_it.dart';

class {{FEATURE_PASCAL}}Screen extends StatefulWidget {
  const {{FEATURE_PASCAL}}Screen({super.key, required this.title});

  final String title;

  @override
  State<{{FEATURE_PASCAL}}Screen> createState() => _{{FEATURE_PASCAL}}ScreenState();
}

class _{{FEATURE_PASCAL}}ScreenState extends State<{{FEATURE_PASCAL}}Screen> {
  final viewModel = GetIt.instance<{{FEATURE_PASCAL}}ViewModel>();

  @override
  void initState() {
    super.initState();
    viewModel.handleEvent(Load{{FEATURE_PASCAL}}Data());
  }

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(
        title: Text(widget.title),
        actions: [
          IconButton(
            icon: Icon(Icons.refresh),
            onPressed: () => viewModel.handleEvent(Refresh{{FEATURE_PASCAL}}Data()),
          ),
        ],
        elevation: 4.0,
      ),
      body: StreamBuilder<{{FEATURE_PASCAL}}UiState>(
        stream: viewModel.stateStream,
        builder: (context, snapshot) {
          final state = snapshot.data ?? {{FEATURE_PASCAL}}Loading();
          return switch (state) {
            {{FEATURE_PASCAL}}Loading() => loadingWidget(),
            // Or use ListView if needed for nested scroll or long list
            {{FEATURE_PASCAL}}Success() => SingleChildScrollView(
                child: {{FEATURE_SNAKE}}ScreenContent(),
              ),
            {{FEATURE_PASCAL}}Error(:final message) => errorWidget(message),
          };
        },
      ),
    );
  }
}
"#;

pub(super) const SCREEN_CONTENT: &str = r#"import 'package:flutter/material.dart';

Widget {{FEATURE_SNAKE}}ScreenContent() {
  // TODO: Implement your screen
  return Column();
}
"#;
